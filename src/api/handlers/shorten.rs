//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenPayload, ShortenResponse};
use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::render_index;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /shortUrls`
///
/// # Request Body
///
/// JSON (`Content-Type: application/json`):
///
/// ```json
/// { "fullUrl": "https://example.com/a/b?c=1" }
/// ```
///
/// or an HTML form field `fullUrl` (`application/x-www-form-urlencoded`).
///
/// # Response
///
/// - JSON request: **201 Created**
///
/// ```json
/// {
///   "url": "https://example.com/a/b?c=1",
///   "shortUrl": "http://localhost:5000/aB3dE5f",
///   "code": "aB3dE5f"
/// }
/// ```
///
/// - Form request: **303 See Other** back to `/`. A form that fails
///   validation gets the home page again with **400** and the message shown.
///
/// # Errors
///
/// Returns 400 Bad Request if `fullUrl` is missing or not an absolute HTTP(S) URL.
/// Returns 503 Service Unavailable if no unique code could be generated.
/// Returns 500 Internal Server Error on database errors.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: ShortenPayload,
) -> Result<Response, AppError> {
    let is_form = payload.is_form();
    let result = create_link(&state, payload).await;

    if is_form {
        return match result {
            Ok(_) => Ok(Redirect::to("/").into_response()),
            Err(AppError::Validation { message, .. }) => {
                let page = render_index(&state, &headers, Some(message)).await?;
                Ok((StatusCode::BAD_REQUEST, page).into_response())
            }
            Err(e) => Err(e),
        };
    }

    let link = result?;
    let short_url = state.public_url.short_url(&headers, &link.code)?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            url: link.long_url,
            short_url,
            code: link.code,
        }),
    )
        .into_response())
}

async fn create_link(state: &AppState, payload: ShortenPayload) -> Result<Link, AppError> {
    payload.request().validate()?;
    let long_url = payload.into_request().into_long_url();

    state.link_service.shorten(long_url).await
}
