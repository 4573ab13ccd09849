//! DTOs for the link shortening endpoint.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// Request to shorten a single URL.
///
/// Accepted as JSON (`{"fullUrl": "..."}`) or as an HTML form field named
/// `fullUrl`. A missing field deserializes to an empty string so that it is
/// reported by validation rather than as a parse error.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(rename = "fullUrl", default)]
    #[validate(length(min = 1, message = "fullUrl is required"))]
    pub full_url: String,
}

impl ShortenRequest {
    /// Returns the URL with surrounding whitespace removed.
    pub fn into_long_url(self) -> String {
        self.full_url.trim().to_string()
    }
}

/// Shorten request together with the encoding it arrived in.
///
/// The encoding decides the response: form posts come from the HTML page and
/// are redirected back to it, JSON posts get a JSON body.
#[derive(Debug)]
pub enum ShortenPayload {
    Json(ShortenRequest),
    Form(ShortenRequest),
}

impl ShortenPayload {
    pub fn request(&self) -> &ShortenRequest {
        match self {
            ShortenPayload::Json(request) | ShortenPayload::Form(request) => request,
        }
    }

    pub fn is_form(&self) -> bool {
        matches!(self, ShortenPayload::Form(_))
    }

    pub fn into_request(self) -> ShortenRequest {
        match self {
            ShortenPayload::Json(request) | ShortenPayload::Form(request) => request,
        }
    }
}

impl<S> FromRequest<S> for ShortenPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.trim_start().starts_with("application/json"));

        if is_json {
            let Json(body) = Json::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    AppError::bad_request(rejection.body_text(), json!({ "field": "fullUrl" }))
                })?;
            Ok(ShortenPayload::Json(body))
        } else {
            let Form(body) = Form::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    AppError::bad_request(rejection.body_text(), json!({ "field": "fullUrl" }))
                })?;
            Ok(ShortenPayload::Form(body))
        }
    }
}

/// JSON response for a created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub url: String,
    pub short_url: String,
    pub code: String,
}
