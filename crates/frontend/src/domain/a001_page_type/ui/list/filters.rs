//! Фильтры списка и сохранённые вкладки фильтров.

use crate::domain::a001_page_type::urls::{PageTypeListUrlFilters, PageTypeListUrlQueryParams};
use crate::shared::filter_tabs::{self, FilterTab};
use crate::shared::storage::KeyValueStorage;

/// Ключ хранилища с вкладками фильтров списка
pub const FILTER_TABS_KEY: &str = "pageTypeFilters";

/// Search string for the list query; blank means no filter.
pub fn get_filter_variables(params: &PageTypeListUrlQueryParams) -> Option<String> {
    params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
}

/// Filters present in the URL, blank values dropped
pub fn get_active_filters(params: &PageTypeListUrlQueryParams) -> PageTypeListUrlFilters {
    PageTypeListUrlFilters {
        query: get_filter_variables(params),
    }
}

pub fn are_filters_applied(filters: &PageTypeListUrlFilters) -> bool {
    filters.query.as_deref().is_some_and(|q| !q.trim().is_empty())
}

/// Current tab index: 0 is "all", `1..=tab_count` are saved tabs and
/// `tab_count + 1` is an unsaved search. An `activeTab` that is not a
/// base-10 number counts as absent.
pub fn current_tab(params: &PageTypeListUrlQueryParams, tab_count: usize) -> usize {
    let explicit = params
        .active_tab
        .as_deref()
        .and_then(|raw| raw.trim().parse::<usize>().ok());

    match explicit {
        Some(tab) => tab,
        None if are_filters_applied(&get_active_filters(params)) => tab_count + 1,
        None => 0,
    }
}

pub fn get_filter_tabs(storage: &impl KeyValueStorage) -> Vec<FilterTab<PageTypeListUrlFilters>> {
    filter_tabs::get_filter_tabs(storage, FILTER_TABS_KEY)
}

pub fn save_filter_tab(storage: &impl KeyValueStorage, name: &str, data: PageTypeListUrlFilters) {
    filter_tabs::save_filter_tab(storage, FILTER_TABS_KEY, name, data);
}

/// `index` is 1-based
pub fn delete_filter_tab(storage: &impl KeyValueStorage, index: usize) {
    filter_tabs::delete_filter_tab(storage, FILTER_TABS_KEY, index);
}
