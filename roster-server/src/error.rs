//! Mapping from roster errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster::core::registry::RegistryError;
use serde::Serialize;

/// Error body shape: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Errors a roster handler can return to the client.
#[derive(Debug)]
pub enum ApiError {
    Registry(RegistryError),
    /// Missing or malformed query string.
    InvalidQuery(String),
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Registry(RegistryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Registry(
                RegistryError::AlreadyRegistered { .. } | RegistryError::NotRegistered { .. },
            ) => StatusCode::BAD_REQUEST,
            Self::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Registry(err) => err.to_string(),
            Self::InvalidQuery(reason) => reason.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody { detail: self.detail() })).into_response()
    }
}
