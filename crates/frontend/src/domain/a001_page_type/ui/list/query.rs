use super::filters::get_filter_variables;
use super::sort::get_sort_query_variables;
use crate::domain::a001_page_type::urls::PageTypeListUrlQueryParams;
use crate::shared::pagination::create_pagination_state;
use contracts::domain::a001_page_type::dto::PageTypeListRequest;

/// Переменные запроса списка из параметров URL и размера страницы
pub fn build_query_variables(
    params: &PageTypeListUrlQueryParams,
    row_number: u32,
) -> PageTypeListRequest {
    let pagination = create_pagination_state(row_number, params);
    let (sort_field, sort_desc) = get_sort_query_variables(params);

    PageTypeListRequest {
        first: pagination.first,
        after: pagination.after,
        last: pagination.last,
        before: pagination.before,
        search: get_filter_variables(params),
        sort_field,
        sort_desc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_page_type::urls::PageTypeListUrlSortField;
    use contracts::domain::a001_page_type::dto::PageTypeSortField;

    #[test]
    fn test_first_page() {
        let vars = build_query_variables(&PageTypeListUrlQueryParams::default(), 20);
        assert_eq!(
            vars,
            PageTypeListRequest {
                first: Some(20),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_after_cursor_pages_forward() {
        let params = PageTypeListUrlQueryParams {
            after: Some("end".into()),
            query: Some(" blog ".into()),
            sort: Some(PageTypeListUrlSortField::Slug),
            asc: Some(false),
            ..Default::default()
        };
        let vars = build_query_variables(&params, 30);
        assert_eq!(vars.first, Some(30));
        assert_eq!(vars.after.as_deref(), Some("end"));
        assert_eq!(vars.last, None);
        assert_eq!(vars.search.as_deref(), Some("blog"));
        assert_eq!(vars.sort_field, PageTypeSortField::Slug);
        assert!(vars.sort_desc);
    }

    #[test]
    fn test_before_cursor_pages_backward() {
        let params = PageTypeListUrlQueryParams {
            before: Some("start".into()),
            ..Default::default()
        };
        let vars = build_query_variables(&params, 10);
        assert_eq!(vars.first, None);
        assert_eq!(vars.last, Some(10));
        assert_eq!(vars.before.as_deref(), Some("start"));
    }

    #[test]
    fn test_dialog_params_do_not_change_query() {
        let params = PageTypeListUrlQueryParams {
            query: Some("faq".into()),
            ..Default::default()
        };
        let with_dialog = params.with_dialog(
            crate::domain::a001_page_type::urls::PageTypeListUrlDialog::Remove,
            vec!["1".into()],
        );
        assert_eq!(
            build_query_variables(&params, 20),
            build_query_variables(&with_dialog, 20)
        );
    }
}
