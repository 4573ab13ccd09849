//! Handlers for listing and deleting links.

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};

use crate::api::dto::link::{DeleteResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all links as JSON, newest first.
///
/// # Endpoint
///
/// `GET /` with `Accept: application/json` (see [`crate::web::handlers::index_handler`])
///
/// # Response
///
/// ```json
/// [
///   {
///     "code": "aB3dE5f",
///     "url": "https://example.com",
///     "shortUrl": "http://localhost:5000/aB3dE5f",
///     "clicks": 2,
///     "createdAt": "2025-01-01T12:00:00Z"
///   }
/// ]
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list().await?;
    let base_url = state.public_url.base(&headers)?;

    Ok(Json(
        links
            .into_iter()
            .map(|link| LinkResponse::from_link(link, &base_url))
            .collect(),
    ))
}

/// Permanently deletes a short link.
///
/// # Endpoint
///
/// `DELETE /delete/{code}`
///
/// # Response
///
/// ```json
/// { "message": "Short URL deleted successfully", "shortUrl": "aB3dE5f" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
/// Returns 500 Internal Server Error on database errors.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.link_service.delete(&code).await?;

    Ok(Json(DeleteResponse {
        message: "Short URL deleted successfully".to_string(),
        short_url: code,
    }))
}
