use serde::{Deserialize, Serialize};

/// Сведения о странице для курсорной пагинации (relay-style)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// Максимальный размер страницы, который отдаёт backend
pub const MAX_PAGE_SIZE: u32 = 100;
