use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 PAGE TYPES
        // ========================================
        .route(
            "/api/a001/page-types",
            get(handlers::a001_page_type::list).post(handlers::a001_page_type::create),
        )
        .route(
            "/api/a001/page-types/bulk-delete",
            post(handlers::a001_page_type::bulk_delete),
        )
        .route(
            "/api/a001/page-types/testdata",
            post(handlers::a001_page_type::insert_test_data),
        )
        .route(
            "/api/a001/page-types/:id",
            get(handlers::a001_page_type::get_by_id),
        )
}
