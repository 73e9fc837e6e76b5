use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, EntityMetadata};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор типа страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageTypeId(pub Uuid);

impl PageTypeId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for PageTypeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PageTypeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Тип страницы (шаблон атрибутов для страниц витрины)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageType {
    pub id: PageTypeId,
    pub name: String,
    pub slug: String,
    pub metadata: EntityMetadata,
}

impl PageType {
    /// Создать новый тип страницы для вставки в БД.
    /// Пустой `slug` выводится из наименования.
    pub fn new_for_insert(name: String, slug: Option<String>) -> Self {
        let slug = match slug {
            Some(s) if !s.trim().is_empty() => s.trim().to_string(),
            _ => slugify(&name),
        };
        Self {
            id: PageTypeId::new_v4(),
            name: name.trim().to_string(),
            slug,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if self.slug.is_empty() {
            return Err("Не удалось сформировать slug из наименования".into());
        }
        if !self
            .slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err("Slug может содержать только a-z, 0-9, '-' и '_'".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания типа страницы
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageTypeDto {
    pub name: String,
    pub slug: Option<String>,
}

/// Формирует slug: латиница и цифры в нижнем регистре, кириллица
/// транслитерируется, остальные последовательности символов сворачиваются в `-`.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for ch in value.chars().flat_map(char::to_lowercase) {
        let piece: Option<&str> = if ch.is_ascii_alphanumeric() {
            None
        } else {
            match transliterate(ch) {
                Some(t) => Some(t),
                None => {
                    pending_dash = true;
                    continue;
                }
            }
        };

        if pending_dash && !slug.is_empty() {
            slug.push('-');
        }
        pending_dash = false;

        match piece {
            Some(t) => slug.push_str(t),
            None => slug.push(ch),
        }
    }

    slug
}

fn transliterate(ch: char) -> Option<&'static str> {
    let t = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_ascii() {
        assert_eq!(slugify("Blog Post"), "blog-post");
        assert_eq!(slugify("  FAQ -- Page 2 "), "faq-page-2");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_cyrillic() {
        assert_eq!(slugify("Новости компании"), "novosti-kompanii");
        assert_eq!(slugify("Объявление"), "obyavlenie");
    }

    #[test]
    fn test_new_for_insert_derives_slug() {
        let pt = PageType::new_for_insert(" About us ".into(), None);
        assert_eq!(pt.name, "About us");
        assert_eq!(pt.slug, "about-us");
        assert!(pt.validate().is_ok());

        let explicit = PageType::new_for_insert("About us".into(), Some("about".into()));
        assert_eq!(explicit.slug, "about");
    }

    #[test]
    fn test_validate_rejects_blank_name_and_bad_slug() {
        let blank = PageType::new_for_insert("   ".into(), None);
        assert!(blank.validate().is_err());

        let bad = PageType::new_for_insert("Ok".into(), Some("Not A Slug".into()));
        assert!(bad.validate().is_err());
    }
}
