//! API body types and the HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

/// `GET /api/health` response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
}

/// One entry of the `GET /api/providers` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub id: String,
    pub endpoint: String,
    pub model: String,
    pub api_key_env: String,
    /// Whether the named environment variable currently holds a value.
    /// Read fresh per request, never cached.
    pub key_configured: bool,
}

/// `GET /api/providers` response.
#[derive(Debug, Serialize)]
pub struct ProvidersResponse {
    pub providers: Vec<ProviderInfo>,
}

/// `POST /api/build-site` success response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildResponse {
    pub message: String,
    pub provider: String,
    pub used_fallback: bool,
    pub website_url: String,
}

/// Request-level errors, mapped onto the two HTTP error shapes.
///
/// Client input problems become 400 with a bare `error` message. Every
/// dispatch, normalization, or write failure becomes 500 with the
/// underlying message attached as `details`; the three are not
/// distinguished from each other at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{error}: {details}")]
    Internal { error: String, details: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(error: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::Internal {
            error: error.into(),
            details: source.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(error) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": error })),
            )
                .into_response(),
            Self::Internal { error, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": error, "details": details })),
            )
                .into_response(),
        }
    }
}
