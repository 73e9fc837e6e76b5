//! HTTP-клиент раздела: список, карточка, создание, массовое удаление.

use crate::shared::api_utils::api_url;
use contracts::domain::a001_page_type::aggregate::{PageType, PageTypeDto};
use contracts::domain::a001_page_type::dto::{
    PageTypeBulkDeleteRequest, PageTypeBulkDeleteResponse, PageTypeListRequest,
    PageTypeListResponse,
};
use gloo_net::http::{Request, Response};
use serde::Deserialize;

const BASE_PATH: &str = "/api/a001/page-types";

async fn error_text(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => format!("HTTP {}: {}", status, body),
        _ => format!("HTTP {}", status),
    }
}

pub async fn list_page_types(req: &PageTypeListRequest) -> Result<PageTypeListResponse, String> {
    let query = serde_qs::to_string(req).map_err(|e| format!("Failed to encode query: {e}"))?;
    let url = api_url(&format!("{}?{}", BASE_PATH, query));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if !response.ok() {
        return Err(error_text(response).await);
    }
    response
        .json::<PageTypeListResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

/// `Ok(None)` when the page type does not exist
pub async fn get_page_type(id: &str) -> Result<Option<PageType>, String> {
    let url = api_url(&format!("{}/{}", BASE_PATH, urlencoding::encode(id)));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(error_text(response).await);
    }
    response
        .json::<PageType>()
        .await
        .map(Some)
        .map_err(|e| format!("Failed to parse response: {e}"))
}

#[derive(Deserialize)]
struct CreatedResponse {
    id: String,
}

/// Returns the id of the new page type
pub async fn create_page_type(dto: &PageTypeDto) -> Result<String, String> {
    let response = Request::post(&api_url(BASE_PATH))
        .json(dto)
        .map_err(|e| format!("Failed to encode request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;

    match response.status() {
        409 => return Err("Тип страницы с таким slug уже существует".to_string()),
        400 => {
            return Err(response
                .text()
                .await
                .unwrap_or_else(|_| "Некорректные данные".to_string()))
        }
        _ => {}
    }
    if !response.ok() {
        return Err(error_text(response).await);
    }
    response
        .json::<CreatedResponse>()
        .await
        .map(|created| created.id)
        .map_err(|e| format!("Failed to parse response: {e}"))
}

pub async fn bulk_delete_page_types(ids: Vec<String>) -> Result<PageTypeBulkDeleteResponse, String> {
    let response = Request::post(&api_url(&format!("{}/bulk-delete", BASE_PATH)))
        .json(&PageTypeBulkDeleteRequest { ids })
        .map_err(|e| format!("Failed to encode request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if !response.ok() {
        return Err(error_text(response).await);
    }
    response
        .json::<PageTypeBulkDeleteResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

pub async fn insert_test_data() -> Result<(), String> {
    let response = Request::post(&api_url(&format!("{}/testdata", BASE_PATH)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if !response.ok() {
        return Err(error_text(response).await);
    }
    Ok(())
}
