use chrono::Utc;
use contracts::domain::a001_page_type::aggregate::{PageType, PageTypeId};
use contracts::domain::a001_page_type::dto::PageTypeSortField;
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set};

use super::cursor::Cursor;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_page_type")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Lowercased `name` and `slug` for case-insensitive search
    pub search_text: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PageType {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        PageType {
            id: PageTypeId(uuid),
            name: m.name,
            slug: m.slug,
            metadata,
        }
    }
}

impl Model {
    pub fn sort_value(&self, field: PageTypeSortField) -> &str {
        match field {
            PageTypeSortField::Name => &self.name,
            PageTypeSortField::Slug => &self.slug,
        }
    }

    pub fn cursor(&self, field: PageTypeSortField) -> Cursor {
        Cursor::new(self.sort_value(field), self.id.clone())
    }
}

/// SQLite `LIKE` folds ASCII only, so search runs over a column lowercased here
pub fn search_text(name: &str, slug: &str) -> String {
    format!("{} {}", name, slug).to_lowercase()
}

/// Направление чтения относительно курсора
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// `first` / `after`
    Forward,
    /// `last` / `before`
    Backward,
}

#[derive(Debug, Clone)]
pub struct PageTypeListQuery {
    pub direction: ScanDirection,
    pub limit: u64,
    pub cursor: Option<Cursor>,
    pub search: Option<String>,
    pub sort_field: PageTypeSortField,
    pub sort_desc: bool,
}

#[derive(Debug)]
pub struct PageTypeListPage {
    /// Rows in display order
    pub items: Vec<Model>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub total_count: u64,
}

fn sort_column(field: PageTypeSortField) -> Column {
    match field {
        PageTypeSortField::Name => Column::Name,
        PageTypeSortField::Slug => Column::Slug,
    }
}

fn live_rows(search: Option<&str>) -> Condition {
    let mut cond = Condition::all().add(Column::IsDeleted.eq(false));
    if let Some(q) = search {
        cond = cond.add(Column::SearchText.contains(q.to_lowercase()));
    }
    cond
}

/// Rows strictly past `cursor` when walking `(sort column, id)` in the given direction
fn past(field: PageTypeSortField, cursor: &Cursor, ascending: bool) -> Condition {
    let col = sort_column(field);
    let value = cursor.sort_value.clone();
    let id = cursor.id.clone();
    if ascending {
        Condition::any().add(col.gt(value.clone())).add(
            Condition::all()
                .add(col.eq(value))
                .add(Column::Id.gt(id)),
        )
    } else {
        Condition::any().add(col.lt(value.clone())).add(
            Condition::all()
                .add(col.eq(value))
                .add(Column::Id.lt(id)),
        )
    }
}

async fn any_past<C: ConnectionTrait>(
    db: &C,
    query: &PageTypeListQuery,
    anchor: &Cursor,
    ascending: bool,
) -> anyhow::Result<bool> {
    let found = Entity::find()
        .filter(live_rows(query.search.as_deref()))
        .filter(past(query.sort_field, anchor, ascending))
        .one(db)
        .await?;
    Ok(found.is_some())
}

/// Keyset-paginated list of live page types
pub async fn list_page<C: ConnectionTrait>(
    db: &C,
    query: &PageTypeListQuery,
) -> anyhow::Result<PageTypeListPage> {
    let total_count = Entity::find()
        .filter(live_rows(query.search.as_deref()))
        .count(db)
        .await?;

    let display_asc = !query.sort_desc;
    let scan_asc = match query.direction {
        ScanDirection::Forward => display_asc,
        ScanDirection::Backward => !display_asc,
    };
    let order = if scan_asc { Order::Asc } else { Order::Desc };

    let mut select = Entity::find().filter(live_rows(query.search.as_deref()));
    if let Some(cursor) = &query.cursor {
        select = select.filter(past(query.sort_field, cursor, scan_asc));
    }
    let mut rows = select
        .order_by(sort_column(query.sort_field), order.clone())
        .order_by(Column::Id, order)
        .limit(query.limit + 1)
        .all(db)
        .await?;

    let has_more = rows.len() as u64 > query.limit;
    rows.truncate(query.limit as usize);

    let page = match query.direction {
        ScanDirection::Forward => {
            let has_previous_page = match (rows.first(), &query.cursor) {
                (Some(first), _) => {
                    any_past(db, query, &first.cursor(query.sort_field), !display_asc).await?
                }
                (None, Some(cursor)) => any_past(db, query, cursor, !display_asc).await?,
                (None, None) => false,
            };
            PageTypeListPage {
                items: rows,
                has_next_page: has_more,
                has_previous_page,
                total_count,
            }
        }
        ScanDirection::Backward => {
            rows.reverse();
            let has_next_page = match (rows.last(), &query.cursor) {
                (Some(last), _) => {
                    any_past(db, query, &last.cursor(query.sort_field), display_asc).await?
                }
                (None, Some(cursor)) => any_past(db, query, cursor, display_asc).await?,
                (None, None) => false,
            };
            PageTypeListPage {
                items: rows,
                has_next_page,
                has_previous_page: has_more,
                total_count,
            }
        }
    };

    Ok(page)
}

pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: Uuid) -> anyhow::Result<Option<PageType>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(db)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn slug_exists<C: ConnectionTrait>(db: &C, slug: &str) -> anyhow::Result<bool> {
    let result = Entity::find()
        .filter(Column::Slug.eq(slug))
        .filter(Column::IsDeleted.eq(false))
        .one(db)
        .await?;
    Ok(result.is_some())
}

/// Ids from `ids` that belong to live rows
pub async fn find_live_ids<C: ConnectionTrait>(
    db: &C,
    ids: &[String],
) -> anyhow::Result<Vec<String>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let rows = Entity::find()
        .filter(Column::Id.is_in(ids.iter().cloned()))
        .filter(Column::IsDeleted.eq(false))
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|m| m.id).collect())
}

pub async fn insert<C: ConnectionTrait>(db: &C, aggregate: &PageType) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.name.clone()),
        slug: Set(aggregate.slug.clone()),
        search_text: Set(search_text(&aggregate.name, &aggregate.slug)),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    };
    active.insert(db).await?;
    Ok(uuid)
}

pub async fn soft_delete_many<C: ConnectionTrait>(db: &C, ids: &[String]) -> anyhow::Result<u64> {
    use sea_orm::sea_query::Expr;
    if ids.is_empty() {
        return Ok(0);
    }
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.is_in(ids.iter().cloned()))
        .filter(Column::IsDeleted.eq(false))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Fills `search_text` for rows written before the column existed
pub async fn backfill_search_text<C: ConnectionTrait>(db: &C) -> anyhow::Result<u64> {
    let rows = Entity::find()
        .filter(Column::SearchText.eq(""))
        .all(db)
        .await?;
    let mut updated = 0;
    for row in rows {
        let text = search_text(&row.name, &row.slug);
        let mut active: ActiveModel = row.into();
        active.search_text = Set(text);
        active.update(db).await?;
        updated += 1;
    }
    Ok(updated)
}
