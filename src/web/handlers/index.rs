//! Home page handler: link list and shorten form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};

use crate::api::handlers::list_links_handler;
use crate::error::AppError;
use crate::state::AppState;

/// One row of the links table.
pub struct LinkRow {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: String,
}

/// Template for the home page.
///
/// Renders `templates/index.html` with the shorten form and every stored
/// link, newest first.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub links: Vec<LinkRow>,
    /// Validation message from a rejected form submission.
    pub error: Option<String>,
}

/// Renders the home page, or the JSON link list for API clients.
///
/// # Endpoint
///
/// `GET /`
///
/// Clients sending `Accept: application/json` (and not `text/html`) receive
/// the same payload as [`list_links_handler`].
pub async fn index_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if wants_json(&headers) {
        return list_links_handler(State(state), headers)
            .await
            .map(IntoResponse::into_response);
    }

    Ok(render_index(&state, &headers, None).await?.into_response())
}

/// Builds the home page, optionally showing `error` above the link table.
///
/// # Errors
///
/// Returns [`AppError::StoreUnavailable`] if the links cannot be listed.
pub async fn render_index(
    state: &AppState,
    headers: &HeaderMap,
    error: Option<String>,
) -> Result<IndexTemplate, AppError> {
    let links = state.link_service.list().await?;
    let base_url = state.public_url.base(headers)?;

    let rows = links
        .into_iter()
        .map(|link| LinkRow {
            short_url: format!("{}/{}", base_url, link.code),
            created_at: link.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            code: link.code,
            long_url: link.long_url,
            clicks: link.clicks,
        })
        .collect();

    Ok(IndexTemplate { links: rows, error })
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| {
            accept.contains("application/json") && !accept.contains("text/html")
        })
}
