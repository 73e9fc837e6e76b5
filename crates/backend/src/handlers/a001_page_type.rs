use axum::http::StatusCode;
use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a001_page_type::aggregate::{PageType, PageTypeDto};
use contracts::domain::a001_page_type::dto::{
    PageTypeBulkDeleteRequest, PageTypeBulkDeleteResponse, PageTypeListRequest,
    PageTypeListResponse,
};
use serde_json::json;

use crate::domain::a001_page_type::service::{self, PageTypeServiceError};
use crate::shared::data::db::get_connection;

fn status_for(e: &PageTypeServiceError) -> StatusCode {
    match e {
        PageTypeServiceError::InvalidCursor(_) | PageTypeServiceError::Validation(_) => {
            StatusCode::BAD_REQUEST
        }
        PageTypeServiceError::DuplicateSlug(_) => StatusCode::CONFLICT,
        PageTypeServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// GET /api/a001/page-types
pub async fn list(
    Query(req): Query<PageTypeListRequest>,
) -> Result<Json<PageTypeListResponse>, StatusCode> {
    service::list(get_connection(), &req)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to list page types: {}", e);
            status_for(&e)
        })
}

/// GET /api/a001/page-types/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<PageType>, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match service::get_by_id(get_connection(), uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get page type {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/a001/page-types
pub async fn create(
    Json(dto): Json<PageTypeDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match service::create(get_connection(), dto).await {
        Ok(id) => Ok(Json(json!({ "id": id.to_string() }))),
        Err(e) => {
            tracing::error!("Failed to create page type: {}", e);
            Err(status_for(&e))
        }
    }
}

/// POST /api/a001/page-types/bulk-delete
pub async fn bulk_delete(
    Json(req): Json<PageTypeBulkDeleteRequest>,
) -> Result<Json<PageTypeBulkDeleteResponse>, StatusCode> {
    service::bulk_delete(get_connection(), &req.ids)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to bulk delete page types: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// POST /api/a001/page-types/testdata
pub async fn insert_test_data() -> StatusCode {
    match service::insert_test_data(get_connection()).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Failed to insert page type test data: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
