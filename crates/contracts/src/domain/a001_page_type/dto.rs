use serde::{Deserialize, Serialize};

use crate::shared::pagination::PageInfo;

/// Поле сортировки списка типов страниц
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageTypeSortField {
    #[default]
    Name,
    Slug,
}

impl PageTypeSortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageTypeSortField::Name => "name",
            PageTypeSortField::Slug => "slug",
        }
    }
}

/// Запрос страницы списка.
///
/// Плоская структура: передаётся как query string (`serde_qs` на клиенте,
/// `axum::extract::Query` на сервере).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTypeListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default)]
    pub sort_field: PageTypeSortField,
    #[serde(default)]
    pub sort_desc: bool,
}

/// Строка списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTypeListItemDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTypeListResponse {
    pub items: Vec<PageTypeListItemDto>,
    pub page_info: PageInfo,
    pub total_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTypeBulkDeleteRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageTypeErrorCode {
    Invalid,
    NotFound,
}

/// Ошибка отдельной операции массового удаления
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTypeError {
    pub field: Option<String>,
    pub code: PageTypeErrorCode,
    pub message: String,
}

/// Пустой `errors` означает полный успех
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTypeBulkDeleteResponse {
    pub count: u64,
    pub errors: Vec<PageTypeError>,
}

impl PageTypeBulkDeleteResponse {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
