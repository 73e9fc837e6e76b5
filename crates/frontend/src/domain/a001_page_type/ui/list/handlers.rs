//! Переходы состояния списка.
//!
//! Каждое действие пользователя превращается в новый URL; побочные эффекты
//! (навигация, сброс выделения, уведомление, перезагрузка) идут через
//! `ListEffects`, чтобы их порядок можно было проверить в тестах.

use super::filters::{self, current_tab, get_active_filters};
use super::sort::sort_params;
use crate::domain::a001_page_type::urls::{
    page_type_list_url, PageTypeListUrlDialog, PageTypeListUrlQueryParams,
    PageTypeListUrlSortField, PAGE_TYPE_SECTION,
};
use crate::shared::list_utils::plural_ru;
use crate::shared::pagination::{next_page_params, previous_page_params};
use crate::shared::storage::KeyValueStorage;
use contracts::domain::a001_page_type::dto::PageTypeBulkDeleteResponse;
use contracts::shared::pagination::PageInfo;

pub trait ListEffects {
    fn reset_selection(&self);
    /// `replace` rewrites the current history entry
    fn navigate(&self, url: &str, replace: bool);
    fn notify_success(&self, text: &str);
    fn refetch(&self);
}

pub fn page_types_word(count: usize) -> &'static str {
    plural_ru(count, "тип страницы", "типа страниц", "типов страниц")
}

pub fn bulk_delete_message(count: u64) -> String {
    let count = count as usize;
    format!("Удалено: {} {}", count, page_types_word(count))
}

/// Новое значение поиска: URL строится заново из активных фильтров,
/// всё остальное (вкладка, сортировка, курсоры, диалог) сбрасывается
pub fn change_filter_field(fx: &impl ListEffects, params: &PageTypeListUrlQueryParams, query: &str) {
    fx.reset_selection();

    let mut filters = get_active_filters(params);
    let query = query.trim();
    filters.query = (!query.is_empty()).then(|| query.to_string());

    let next = PageTypeListUrlQueryParams {
        query: filters.query,
        ..Default::default()
    };
    fx.navigate(&page_type_list_url(&next), false);
}

pub fn change_tab(fx: &impl ListEffects, storage: &impl KeyValueStorage, tab: usize) {
    fx.reset_selection();

    if tab == 0 {
        fx.navigate(PAGE_TYPE_SECTION, false);
        return;
    }

    let tabs = filters::get_filter_tabs(storage);
    match tabs.into_iter().nth(tab - 1) {
        Some(saved) => {
            let next = PageTypeListUrlQueryParams {
                active_tab: Some(tab.to_string()),
                query: saved.data.query,
                ..Default::default()
            };
            fx.navigate(&page_type_list_url(&next), false);
        }
        None => {
            log::warn!("Filter tab #{} does not exist", tab);
            fx.navigate(PAGE_TYPE_SECTION, false);
        }
    }
}

/// Сохраняет текущие фильтры новой вкладкой и переключается на неё
pub fn save_tab(
    fx: &impl ListEffects,
    storage: &impl KeyValueStorage,
    params: &PageTypeListUrlQueryParams,
    name: &str,
) {
    let previous_count = filters::get_filter_tabs(storage).len();
    filters::save_filter_tab(storage, name, get_active_filters(params));
    change_tab(fx, storage, previous_count + 1);
}

pub fn delete_tab(
    fx: &impl ListEffects,
    storage: &impl KeyValueStorage,
    params: &PageTypeListUrlQueryParams,
) {
    let tab_count = filters::get_filter_tabs(storage).len();
    filters::delete_filter_tab(storage, current_tab(params, tab_count));
    fx.reset_selection();
    fx.navigate(PAGE_TYPE_SECTION, false);
}

pub fn sort(
    fx: &impl ListEffects,
    params: &PageTypeListUrlQueryParams,
    field: PageTypeListUrlSortField,
) {
    fx.navigate(&page_type_list_url(&sort_params(params, field)), true);
}

pub fn next_page(fx: &impl ListEffects, params: &PageTypeListUrlQueryParams, page_info: &PageInfo) {
    if let Some(next) = next_page_params(params, page_info) {
        fx.navigate(&page_type_list_url(&next), true);
    }
}

pub fn previous_page(
    fx: &impl ListEffects,
    params: &PageTypeListUrlQueryParams,
    page_info: &PageInfo,
) {
    if let Some(previous) = previous_page_params(params, page_info) {
        fx.navigate(&page_type_list_url(&previous), true);
    }
}

pub fn open_dialog(
    fx: &impl ListEffects,
    params: &PageTypeListUrlQueryParams,
    action: PageTypeListUrlDialog,
    ids: Vec<String>,
) {
    fx.navigate(&page_type_list_url(&params.with_dialog(action, ids)), false);
}

pub fn close_dialog(fx: &impl ListEffects, params: &PageTypeListUrlQueryParams) {
    fx.navigate(&page_type_list_url(&params.without_dialog()), false);
}

/// Returns `true` when the deletion went through. A response with errors
/// leaves the list, the selection and the URL untouched.
pub fn on_bulk_delete_completed(
    fx: &impl ListEffects,
    params: &PageTypeListUrlQueryParams,
    response: &PageTypeBulkDeleteResponse,
) -> bool {
    if !response.is_success() {
        for error in &response.errors {
            log::warn!("Bulk delete rejected: {:?} {}", error.code, error.message);
        }
        return false;
    }

    fx.notify_success(&bulk_delete_message(response.count));
    fx.reset_selection();
    fx.refetch();
    fx.navigate(&page_type_list_url(&params.without_dialog()), false);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_page_type::urls::PageTypeListUrlFilters;
    use crate::shared::filter_tabs::FilterTab;
    use crate::shared::storage::MemoryStorage;
    use contracts::domain::a001_page_type::dto::{PageTypeError, PageTypeErrorCode};
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Recorded {
        ResetSelection,
        Navigate(String, bool),
        Notify(String),
        Refetch,
    }

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<Recorded>>,
    }

    impl Recorder {
        fn calls(&self) -> Vec<Recorded> {
            self.calls.borrow().clone()
        }
    }

    impl ListEffects for Recorder {
        fn reset_selection(&self) {
            self.calls.borrow_mut().push(Recorded::ResetSelection);
        }
        fn navigate(&self, url: &str, replace: bool) {
            self.calls
                .borrow_mut()
                .push(Recorded::Navigate(url.to_string(), replace));
        }
        fn notify_success(&self, text: &str) {
            self.calls.borrow_mut().push(Recorded::Notify(text.to_string()));
        }
        fn refetch(&self) {
            self.calls.borrow_mut().push(Recorded::Refetch);
        }
    }

    fn saved_tabs(storage: &MemoryStorage) -> Vec<FilterTab<PageTypeListUrlFilters>> {
        filters::get_filter_tabs(storage)
    }

    fn filters_with(query: &str) -> PageTypeListUrlFilters {
        PageTypeListUrlFilters {
            query: Some(query.to_string()),
        }
    }

    #[test]
    fn test_save_tab_appends_and_switches_to_it() {
        let storage = MemoryStorage::default();
        filters::save_filter_tab(&storage, "Existing", filters_with("news"));
        let fx = Recorder::default();
        let params = PageTypeListUrlQueryParams {
            query: Some("blog".into()),
            ..Default::default()
        };

        save_tab(&fx, &storage, &params, "X");

        let tabs = saved_tabs(&storage);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[1].name, "X");
        assert_eq!(tabs[1].data, filters_with("blog"));
        assert_eq!(
            fx.calls(),
            vec![
                Recorded::ResetSelection,
                Recorded::Navigate("/page-types?activeTab=2&query=blog".into(), false),
            ]
        );
    }

    #[test]
    fn test_delete_tab_removes_it_and_shows_unfiltered_list() {
        let storage = MemoryStorage::default();
        filters::save_filter_tab(&storage, "First", filters_with("a"));
        filters::save_filter_tab(&storage, "Second", filters_with("b"));
        let fx = Recorder::default();
        let params = PageTypeListUrlQueryParams {
            active_tab: Some("1".into()),
            query: Some("a".into()),
            action: Some(PageTypeListUrlDialog::DeleteSearch),
            ..Default::default()
        };

        delete_tab(&fx, &storage, &params);

        let tabs = saved_tabs(&storage);
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].name, "Second");
        assert_eq!(
            fx.calls(),
            vec![
                Recorded::ResetSelection,
                Recorded::Navigate("/page-types".into(), false),
            ]
        );
    }

    #[test]
    fn test_bulk_delete_success_runs_effects_in_order() {
        let fx = Recorder::default();
        let params = PageTypeListUrlQueryParams {
            query: Some("blog".into()),
            ids: vec!["1".into(), "2".into()],
            action: Some(PageTypeListUrlDialog::Remove),
            ..Default::default()
        };
        let response = PageTypeBulkDeleteResponse {
            count: 2,
            errors: Vec::new(),
        };

        assert!(on_bulk_delete_completed(&fx, &params, &response));
        assert_eq!(
            fx.calls(),
            vec![
                Recorded::Notify("Удалено: 2 типа страниц".into()),
                Recorded::ResetSelection,
                Recorded::Refetch,
                Recorded::Navigate("/page-types?query=blog".into(), false),
            ]
        );
    }

    #[test]
    fn test_bulk_delete_with_error_has_no_effects() {
        let fx = Recorder::default();
        let params = PageTypeListUrlQueryParams {
            ids: vec!["1".into(), "2".into()],
            action: Some(PageTypeListUrlDialog::Remove),
            ..Default::default()
        };
        let response = PageTypeBulkDeleteResponse {
            count: 0,
            errors: vec![PageTypeError {
                field: Some("ids".into()),
                code: PageTypeErrorCode::NotFound,
                message: "Page type 2 not found".into(),
            }],
        };

        assert!(!on_bulk_delete_completed(&fx, &params, &response));
        assert!(fx.calls().is_empty());
    }

    #[test]
    fn test_filter_change_keeps_only_filters() {
        let fx = Recorder::default();
        let params = PageTypeListUrlQueryParams {
            active_tab: Some("1".into()),
            query: Some("old".into()),
            sort: Some(PageTypeListUrlSortField::Slug),
            asc: Some(false),
            after: Some("c".into()),
            ids: vec!["1".into()],
            ..Default::default()
        };

        change_filter_field(&fx, &params, " new ");
        change_filter_field(&fx, &params, "   ");
        assert_eq!(
            fx.calls(),
            vec![
                Recorded::ResetSelection,
                Recorded::Navigate("/page-types?query=new".into(), false),
                Recorded::ResetSelection,
                Recorded::Navigate("/page-types".into(), false),
            ]
        );
    }

    #[test]
    fn test_change_tab() {
        let storage = MemoryStorage::default();
        filters::save_filter_tab(&storage, "FAQ", filters_with("faq"));
        let fx = Recorder::default();

        change_tab(&fx, &storage, 1);
        change_tab(&fx, &storage, 0);
        change_tab(&fx, &storage, 7);

        assert_eq!(
            fx.calls(),
            vec![
                Recorded::ResetSelection,
                Recorded::Navigate("/page-types?activeTab=1&query=faq".into(), false),
                Recorded::ResetSelection,
                Recorded::Navigate("/page-types".into(), false),
                Recorded::ResetSelection,
                Recorded::Navigate("/page-types".into(), false),
            ]
        );
    }

    #[test]
    fn test_sort_and_paging_replace_history() {
        let fx = Recorder::default();
        let params = PageTypeListUrlQueryParams::default();
        let page_info = PageInfo {
            has_next_page: true,
            has_previous_page: false,
            start_cursor: Some("s".into()),
            end_cursor: Some("e".into()),
        };

        sort(&fx, &params, PageTypeListUrlSortField::Name);
        next_page(&fx, &params, &page_info);
        previous_page(&fx, &params, &page_info);

        assert_eq!(
            fx.calls(),
            vec![
                Recorded::Navigate("/page-types?sort=name&asc=false".into(), true),
                Recorded::Navigate("/page-types?after=e".into(), true),
                Recorded::Navigate("/page-types?before=s".into(), true),
            ]
        );
    }

    #[test]
    fn test_dialog_open_and_close() {
        let fx = Recorder::default();
        let params = PageTypeListUrlQueryParams {
            query: Some("x".into()),
            ..Default::default()
        };

        open_dialog(&fx, &params, PageTypeListUrlDialog::DeleteSearch, Vec::new());
        let opened = params.with_dialog(PageTypeListUrlDialog::DeleteSearch, Vec::new());
        close_dialog(&fx, &opened);

        assert_eq!(
            fx.calls(),
            vec![
                Recorded::Navigate("/page-types?query=x&action=delete-search".into(), false),
                Recorded::Navigate("/page-types?query=x".into(), false),
            ]
        );
    }

    #[test]
    fn test_bulk_delete_message_plural() {
        assert_eq!(bulk_delete_message(1), "Удалено: 1 тип страницы");
        assert_eq!(bulk_delete_message(5), "Удалено: 5 типов страниц");
    }
}
