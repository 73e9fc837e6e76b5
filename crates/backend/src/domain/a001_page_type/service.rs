use super::cursor::{Cursor, CursorError};
use super::repository::{self, PageTypeListQuery, ScanDirection};
use contracts::domain::a001_page_type::aggregate::{PageType, PageTypeDto};
use contracts::domain::a001_page_type::dto::{
    PageTypeBulkDeleteResponse, PageTypeError, PageTypeErrorCode, PageTypeListItemDto,
    PageTypeListRequest, PageTypeListResponse,
};
use contracts::shared::pagination::{PageInfo, MAX_PAGE_SIZE};
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

/// Размер страницы, если клиент не передал ни `first`, ни `last`
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, thiserror::Error)]
pub enum PageTypeServiceError {
    #[error("invalid cursor: {0}")]
    InvalidCursor(#[from] CursorError),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("slug '{0}' is already taken")]
    DuplicateSlug(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Translates the wire request into a repository query.
/// `after` wins over `before` when both are present.
pub fn to_list_query(req: &PageTypeListRequest) -> Result<PageTypeListQuery, CursorError> {
    let (direction, size, raw_cursor) = match (&req.after, &req.before, req.last) {
        (Some(after), _, _) => (ScanDirection::Forward, req.first, Some(after)),
        (None, Some(before), last) => (ScanDirection::Backward, last.or(req.first), Some(before)),
        (None, None, Some(last)) if req.first.is_none() => (ScanDirection::Backward, Some(last), None),
        (None, None, _) => (ScanDirection::Forward, req.first, None),
    };

    let cursor = raw_cursor.map(|c| Cursor::decode(c)).transpose()?;
    let limit = size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE) as u64;
    let search = req
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(PageTypeListQuery {
        direction,
        limit,
        cursor,
        search,
        sort_field: req.sort_field,
        sort_desc: req.sort_desc,
    })
}

/// Страница списка типов страниц
pub async fn list(
    db: &DatabaseConnection,
    req: &PageTypeListRequest,
) -> Result<PageTypeListResponse, PageTypeServiceError> {
    let query = to_list_query(req)?;
    let page = repository::list_page(db, &query).await?;

    let page_info = PageInfo {
        has_next_page: page.has_next_page,
        has_previous_page: page.has_previous_page,
        start_cursor: page.items.first().map(|m| m.cursor(query.sort_field).encode()),
        end_cursor: page.items.last().map(|m| m.cursor(query.sort_field).encode()),
    };

    let items = page
        .items
        .into_iter()
        .map(|m| PageTypeListItemDto {
            updated_at: m
                .updated_at
                .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            id: m.id,
            name: m.name,
            slug: m.slug,
        })
        .collect();

    Ok(PageTypeListResponse {
        items,
        page_info,
        total_count: page.total_count,
    })
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> anyhow::Result<Option<PageType>> {
    repository::get_by_id(db, id).await
}

/// Создание нового типа страницы
pub async fn create(
    db: &DatabaseConnection,
    dto: PageTypeDto,
) -> Result<Uuid, PageTypeServiceError> {
    let mut aggregate = PageType::new_for_insert(dto.name, dto.slug);

    aggregate
        .validate()
        .map_err(PageTypeServiceError::Validation)?;

    if repository::slug_exists(db, &aggregate.slug).await? {
        return Err(PageTypeServiceError::DuplicateSlug(aggregate.slug));
    }

    aggregate.before_write();

    let id = repository::insert(db, &aggregate).await?;
    tracing::info!("Created page type {} ({})", aggregate.name, id);
    Ok(id)
}

/// Массовое удаление: либо удаляются все переданные id, либо ни один.
pub async fn bulk_delete(
    db: &DatabaseConnection,
    ids: &[String],
) -> anyhow::Result<PageTypeBulkDeleteResponse> {
    let mut errors = Vec::new();
    let mut valid = Vec::with_capacity(ids.len());
    for raw in ids {
        match Uuid::parse_str(raw) {
            Ok(uuid) => valid.push(uuid.to_string()),
            Err(_) => errors.push(PageTypeError {
                field: Some("ids".to_string()),
                code: PageTypeErrorCode::Invalid,
                message: format!("'{}' is not a valid page type id", raw),
            }),
        }
    }
    valid.sort();
    valid.dedup();

    let txn = db.begin().await?;

    let live = repository::find_live_ids(&txn, &valid).await?;
    for id in valid.iter().filter(|id| !live.contains(id)) {
        errors.push(PageTypeError {
            field: Some("ids".to_string()),
            code: PageTypeErrorCode::NotFound,
            message: format!("Page type {} not found", id),
        });
    }

    if !errors.is_empty() {
        txn.rollback().await?;
        tracing::warn!(
            "Bulk delete of {} page types rejected: {} error(s)",
            ids.len(),
            errors.len()
        );
        return Ok(PageTypeBulkDeleteResponse { count: 0, errors });
    }

    let count = repository::soft_delete_many(&txn, &valid).await?;
    txn.commit().await?;
    tracing::info!("Bulk deleted {} page types", count);

    Ok(PageTypeBulkDeleteResponse { count, errors })
}

/// Вставка тестовых данных
pub async fn insert_test_data(db: &DatabaseConnection) -> anyhow::Result<()> {
    let names = [
        "Блог",
        "Новости",
        "О компании",
        "Контакты",
        "FAQ",
        "Landing",
        "Акции",
        "Вакансии",
        "Доставка и оплата",
        "Гарантия",
        "Отзывы",
        "Партнёрам",
    ];

    for name in names {
        match create(
            db,
            PageTypeDto {
                name: name.to_string(),
                slug: None,
            },
        )
        .await
        {
            Ok(_) | Err(PageTypeServiceError::DuplicateSlug(_)) => {}
            Err(e) => return Err(anyhow::anyhow!(e)),
        }
    }

    Ok(())
}
