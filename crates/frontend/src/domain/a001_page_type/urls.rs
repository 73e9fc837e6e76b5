//! Адреса раздела "Типы страниц" и параметры списка в URL.
//!
//! Всё состояние экрана списка (вкладка, поиск, сортировка, курсоры,
//! выбранные строки, открытый диалог) живёт в query string.

use crate::shared::pagination::CursorParams;
use serde::{Deserialize, Serialize};

pub const PAGE_TYPE_SECTION: &str = "/page-types";

/// Открытый диалог списка (значение `action`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageTypeListUrlDialog {
    Remove,
    SaveSearch,
    DeleteSearch,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageTypeListUrlSortField {
    #[default]
    Name,
    Slug,
}

impl PageTypeListUrlSortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageTypeListUrlSortField::Name => "name",
            PageTypeListUrlSortField::Slug => "slug",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(PageTypeListUrlSortField::Name),
            "slug" => Some(PageTypeListUrlSortField::Slug),
            _ => None,
        }
    }
}

/// Значения фильтров; то, что сохраняется во вкладке
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTypeListUrlFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTypeListUrlQueryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<PageTypeListUrlSortField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asc: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<PageTypeListUrlDialog>,
}

impl PageTypeListUrlQueryParams {
    /// Parses `location.search` (with or without the leading `?`).
    /// A query string that does not fit falls back to the defaults.
    pub fn parse(search: &str) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);
        if raw.is_empty() {
            return Self::default();
        }
        let config = serde_qs::Config::new(5, false);
        match config.deserialize_str::<Self>(raw) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("Ignoring unreadable list parameters '{}': {}", raw, e);
                Self::default()
            }
        }
    }

    pub fn to_query_string(&self) -> String {
        match serde_qs::to_string(self) {
            Ok(qs) => qs,
            Err(e) => {
                log::warn!("Failed to serialize list parameters: {}", e);
                String::new()
            }
        }
    }

    pub fn with_dialog(&self, action: PageTypeListUrlDialog, ids: Vec<String>) -> Self {
        Self {
            action: Some(action),
            ids,
            ..self.clone()
        }
    }

    pub fn without_dialog(&self) -> Self {
        Self {
            action: None,
            ids: Vec::new(),
            ..self.clone()
        }
    }

    pub fn is_dialog_open(&self, action: PageTypeListUrlDialog) -> bool {
        self.action == Some(action)
    }
}

impl CursorParams for PageTypeListUrlQueryParams {
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

pub fn page_type_list_url(params: &PageTypeListUrlQueryParams) -> String {
    let qs = params.to_query_string();
    if qs.is_empty() {
        PAGE_TYPE_SECTION.to_string()
    } else {
        format!("{}?{}", PAGE_TYPE_SECTION, qs)
    }
}

pub fn page_type_url(id: &str) -> String {
    format!("{}/{}", PAGE_TYPE_SECTION, urlencoding::encode(id))
}

pub fn page_type_add_url() -> String {
    format!("{}/add", PAGE_TYPE_SECTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_round_trip() {
        let params = PageTypeListUrlQueryParams {
            active_tab: Some("2".into()),
            query: Some("blog post".into()),
            sort: Some(PageTypeListUrlSortField::Slug),
            asc: Some(false),
            ids: vec!["a".into(), "b".into()],
            action: Some(PageTypeListUrlDialog::Remove),
            ..Default::default()
        };

        let url = page_type_list_url(&params);
        assert!(url.starts_with("/page-types?"));
        assert!(url.contains("activeTab=2"));
        assert!(url.contains("action=remove"));

        let search = url.trim_start_matches(PAGE_TYPE_SECTION);
        assert_eq!(PageTypeListUrlQueryParams::parse(search), params);
    }

    #[test]
    fn test_empty_params_give_bare_section_url() {
        assert_eq!(
            page_type_list_url(&PageTypeListUrlQueryParams::default()),
            "/page-types"
        );
        assert_eq!(PageTypeListUrlQueryParams::parse(""), Default::default());
        assert_eq!(PageTypeListUrlQueryParams::parse("?"), Default::default());
    }

    #[test]
    fn test_unreadable_query_falls_back_to_defaults() {
        let params = PageTypeListUrlQueryParams::parse("?sort=price&asc=maybe");
        assert_eq!(params, PageTypeListUrlQueryParams::default());
    }

    #[test]
    fn test_dialog_tokens() {
        let params = PageTypeListUrlQueryParams {
            query: Some("x".into()),
            ..Default::default()
        };
        let open = params.with_dialog(PageTypeListUrlDialog::SaveSearch, Vec::new());
        assert!(page_type_list_url(&open).contains("action=save-search"));
        assert!(open.is_dialog_open(PageTypeListUrlDialog::SaveSearch));
        assert!(!open.is_dialog_open(PageTypeListUrlDialog::Remove));

        let closed = open
            .with_dialog(PageTypeListUrlDialog::Remove, vec!["1".into()])
            .without_dialog();
        assert_eq!(closed, params);
    }

    #[test]
    fn test_item_urls() {
        assert_eq!(page_type_url("a b/c"), "/page-types/a%20b%2Fc");
        assert_eq!(page_type_add_url(), "/page-types/add");
    }
}
