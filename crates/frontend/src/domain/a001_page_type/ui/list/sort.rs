//! Сортировка списка: URL -> переменные запроса и переключение по клику.

use crate::domain::a001_page_type::urls::{PageTypeListUrlQueryParams, PageTypeListUrlSortField};
use contracts::domain::a001_page_type::dto::PageTypeSortField;

/// Default order is by name, ascending
pub fn get_sort_query_variables(params: &PageTypeListUrlQueryParams) -> (PageTypeSortField, bool) {
    let field = match params.sort.unwrap_or_default() {
        PageTypeListUrlSortField::Name => PageTypeSortField::Name,
        PageTypeListUrlSortField::Slug => PageTypeSortField::Slug,
    };
    let ascending = params.asc.unwrap_or(true);
    (field, !ascending)
}

pub fn is_ascending(params: &PageTypeListUrlQueryParams) -> bool {
    params.asc.unwrap_or(true)
}

/// Clicking the current column flips the direction, another column starts
/// ascending. Cursors belong to the old order and are dropped.
pub fn sort_params(
    params: &PageTypeListUrlQueryParams,
    field: PageTypeListUrlSortField,
) -> PageTypeListUrlQueryParams {
    let asc = if params.sort.unwrap_or_default() == field {
        !is_ascending(params)
    } else {
        true
    };
    PageTypeListUrlQueryParams {
        sort: Some(field),
        asc: Some(asc),
        after: None,
        before: None,
        ..params.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sort_is_name_ascending() {
        let params = PageTypeListUrlQueryParams::default();
        assert_eq!(get_sort_query_variables(&params), (PageTypeSortField::Name, false));
    }

    #[test]
    fn test_same_field_toggles_direction() {
        let params = PageTypeListUrlQueryParams {
            after: Some("cursor".into()),
            ..Default::default()
        };
        let once = sort_params(&params, PageTypeListUrlSortField::Name);
        assert_eq!(once.asc, Some(false));
        assert_eq!(once.after, None);

        let twice = sort_params(&once, PageTypeListUrlSortField::Name);
        assert_eq!(twice.asc, Some(true));
    }

    #[test]
    fn test_new_field_starts_ascending() {
        let params = PageTypeListUrlQueryParams {
            sort: Some(PageTypeListUrlSortField::Name),
            asc: Some(false),
            query: Some("blog".into()),
            ..Default::default()
        };
        let sorted = sort_params(&params, PageTypeListUrlSortField::Slug);
        assert_eq!(sorted.sort, Some(PageTypeListUrlSortField::Slug));
        assert_eq!(sorted.asc, Some(true));
        assert_eq!(sorted.query.as_deref(), Some("blog"));
        assert_eq!(get_sort_query_variables(&sorted), (PageTypeSortField::Slug, false));
    }
}
