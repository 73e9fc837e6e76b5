//! Opaque keyset cursors: base64 of the JSON pair `[sort value, id]`.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor is not valid base64")]
    Encoding,
    #[error("cursor payload is malformed")]
    Payload,
}

/// Position of a row in the current sort order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    pub sort_value: String,
    pub id: String,
}

impl Cursor {
    pub fn new(sort_value: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            sort_value: sort_value.into(),
            id: id.into(),
        }
    }

    pub fn encode(&self) -> String {
        let payload = serde_json::json!([self.sort_value, self.id]).to_string();
        URL_SAFE_NO_PAD.encode(payload.as_bytes())
    }

    pub fn decode(raw: &str) -> Result<Self, CursorError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(raw.trim())
            .map_err(|_| CursorError::Encoding)?;
        let (sort_value, id): (String, String) =
            serde_json::from_slice(&bytes).map_err(|_| CursorError::Payload)?;
        Ok(Self { sort_value, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_survives_encoding() {
        let cursor = Cursor::new("Блог & новости", "7b0d7c1e-0000-4000-8000-000000000001");
        let encoded = cursor.encode();
        assert!(!encoded.contains('+') && !encoded.contains('/') && !encoded.contains('='));
        assert_eq!(Cursor::decode(&encoded), Ok(cursor));
    }

    #[test]
    fn test_cursor_rejects_garbage() {
        assert_eq!(Cursor::decode("***"), Err(CursorError::Encoding));
        let not_a_pair = URL_SAFE_NO_PAD.encode(b"{\"a\":1}");
        assert_eq!(Cursor::decode(&not_a_pair), Err(CursorError::Payload));
    }
}
