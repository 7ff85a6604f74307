use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::error::SearchError;
use crate::models::{SearchRequest, TavilyResponse};
use crate::pipeline::SearchPipeline;

pub async fn search_handler(
    State(pipeline): State<Arc<SearchPipeline>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<TavilyResponse>, (StatusCode, String)> {
    if request.query.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Query cannot be empty".to_string()));
    }

    let response = pipeline.search(&request).await.map_err(|e| {
        log::error!("search failed: {e}");
        error_response(e)
    })?;

    Ok(Json(response))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "tavxng" }))
}

/// Maps pipeline errors onto the wire statuses and details callers of the
/// original adapter expect.
fn error_response(err: SearchError) -> (StatusCode, String) {
    match err {
        SearchError::BackendTimeout => {
            (StatusCode::GATEWAY_TIMEOUT, "SearXNG timeout".to_string())
        }
        SearchError::BackendStatus(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "SearXNG request failed".to_string(),
        ),
        SearchError::Backend(_) | SearchError::ScrapeClient(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Search service unavailable".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_timeout_maps_to_504() {
        let (status, detail) = error_response(SearchError::BackendTimeout);
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(detail, "SearXNG timeout");
    }

    #[test]
    fn test_backend_status_maps_to_500() {
        let (status, detail) = error_response(SearchError::BackendStatus(429));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail, "SearXNG request failed");
    }

    #[test]
    fn test_other_backend_errors_map_to_unavailable() {
        let (status, detail) = error_response(SearchError::Backend("boom".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail, "Search service unavailable");

        let (status, detail) = error_response(SearchError::ScrapeClient("boom".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail, "Search service unavailable");
    }
}
