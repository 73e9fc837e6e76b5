//! Cursor pagination helpers shared by list screens.

use contracts::shared::pagination::PageInfo;

/// Variables sent to the list endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationState {
    pub first: Option<u32>,
    pub after: Option<String>,
    pub last: Option<u32>,
    pub before: Option<String>,
}

/// URL parameters that carry pagination cursors
pub trait CursorParams: Clone {
    fn after(&self) -> Option<&str>;
    fn before(&self) -> Option<&str>;
    fn with_cursors(&self, after: Option<String>, before: Option<String>) -> Self;
}

/// `after` → forward page, `before` → backward page, neither → first page
pub fn create_pagination_state(row_number: u32, params: &impl CursorParams) -> PaginationState {
    if let Some(after) = params.after() {
        PaginationState {
            first: Some(row_number),
            after: Some(after.to_string()),
            ..Default::default()
        }
    } else if let Some(before) = params.before() {
        PaginationState {
            last: Some(row_number),
            before: Some(before.to_string()),
            ..Default::default()
        }
    } else {
        PaginationState {
            first: Some(row_number),
            ..Default::default()
        }
    }
}

/// Having arrived through a cursor means there is a page on the other side
pub fn adjust_page_info(page_info: &PageInfo, state: &PaginationState) -> PageInfo {
    PageInfo {
        has_next_page: state.before.is_some() || page_info.has_next_page,
        has_previous_page: state.after.is_some() || page_info.has_previous_page,
        ..page_info.clone()
    }
}

pub fn next_page_params<P: CursorParams>(params: &P, page_info: &PageInfo) -> Option<P> {
    let end = page_info.end_cursor.clone()?;
    Some(params.with_cursors(Some(end), None))
}

pub fn previous_page_params<P: CursorParams>(params: &P, page_info: &PageInfo) -> Option<P> {
    let start = page_info.start_cursor.clone()?;
    Some(params.with_cursors(None, Some(start)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Params {
        after: Option<String>,
        before: Option<String>,
        query: Option<String>,
    }

    impl CursorParams for Params {
        fn after(&self) -> Option<&str> {
            self.after.as_deref()
        }
        fn before(&self) -> Option<&str> {
            self.before.as_deref()
        }
        fn with_cursors(&self, after: Option<String>, before: Option<String>) -> Self {
            Self {
                after,
                before,
                ..self.clone()
            }
        }
    }

    fn page_info() -> PageInfo {
        PageInfo {
            has_next_page: false,
            has_previous_page: false,
            start_cursor: Some("s".into()),
            end_cursor: Some("e".into()),
        }
    }

    #[test]
    fn test_pagination_state_from_params() {
        let state = create_pagination_state(20, &Params::default());
        assert_eq!(state.first, Some(20));
        assert!(state.after.is_none() && state.last.is_none());

        let forward = Params {
            after: Some("x".into()),
            ..Default::default()
        };
        let state = create_pagination_state(20, &forward);
        assert_eq!((state.first, state.after.as_deref()), (Some(20), Some("x")));

        let backward = Params {
            before: Some("y".into()),
            ..Default::default()
        };
        let state = create_pagination_state(10, &backward);
        assert_eq!((state.last, state.before.as_deref()), (Some(10), Some("y")));
        assert!(state.first.is_none());
    }

    #[test]
    fn test_adjust_page_info() {
        let state = PaginationState {
            last: Some(10),
            before: Some("y".into()),
            ..Default::default()
        };
        let adjusted = adjust_page_info(&page_info(), &state);
        assert!(adjusted.has_next_page);
        assert!(!adjusted.has_previous_page);
    }

    #[test]
    fn test_next_and_previous_keep_other_params() {
        let params = Params {
            after: Some("old".into()),
            query: Some("blog".into()),
            ..Default::default()
        };

        let next = next_page_params(&params, &page_info()).unwrap();
        assert_eq!(next.after.as_deref(), Some("e"));
        assert!(next.before.is_none());
        assert_eq!(next.query.as_deref(), Some("blog"));

        let prev = previous_page_params(&params, &page_info()).unwrap();
        assert!(prev.after.is_none());
        assert_eq!(prev.before.as_deref(), Some("s"));

        assert!(next_page_params(&params, &PageInfo::default()).is_none());
    }
}
