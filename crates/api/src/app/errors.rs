//! Gateway error model and its mapping to HTTP responses.

use axum::http::StatusCode;
use axum::http::header::InvalidHeaderValue;
use thiserror::Error;

use itemgate_core::DomainError;
use itemgate_store::{KeyProviderError, StoreError};

use crate::app::dto::GatewayResponse;
use crate::app::headers::CorsHeaders;

/// Everything that can terminate a request without a success envelope.
///
/// Client faults (4xx) surface their status code and nothing else; server
/// faults are logged and collapsed to a generic 500.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Missing or mismatched API key.
    #[error("api key missing or mismatched")]
    Unauthorized,

    /// The HTTP method has no handler.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// PUT/DELETE without a path identifier.
    #[error("missing path identifier")]
    MissingPathId,

    /// The request body was not valid JSON for the expected payload shape.
    #[error("malformed request body: {0}")]
    MalformedBody(serde_json::Error),

    /// The decoded payload failed a validation rule.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// No item with the requested identifier.
    #[error("no such item")]
    NotFound,

    /// The store adapter failed.
    #[error("store call failed: {0}")]
    Store(#[from] StoreError),

    /// The key provider failed.
    #[error("api key retrieval failed: {0}")]
    Keys(#[from] KeyProviderError),

    /// The key provider answered but no key is configured.
    #[error("api key not configured")]
    KeyNotConfigured,

    /// Serializing the success envelope failed.
    #[error("response serialization failed: {0}")]
    Encode(serde_json::Error),

    /// A response header could not be constructed from its parts.
    #[error("response header construction failed: {0}")]
    Header(#[from] InvalidHeaderValue),
}

impl GatewayError {
    /// Status code surfaced to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingPathId => StatusCode::BAD_REQUEST,
            Self::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_)
            | Self::Keys(_)
            | Self::KeyNotConfigured
            | Self::Encode(_)
            | Self::Header(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the failure originated in this system rather than the caller.
    pub fn is_server_fault(&self) -> bool {
        self.status().is_server_error()
    }
}

/// Collapse an error into the bare-status response shape.
///
/// Server faults are logged with context and flattened to a generic 500 so no
/// internal detail reaches the caller. Client faults are not system errors
/// and only leave a debug trace.
pub fn error_response(err: GatewayError, cors: &CorsHeaders) -> GatewayResponse {
    let status = if err.is_server_fault() {
        tracing::error!(error = %err, "request failed");
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        tracing::debug!(error = %err, status = %err.status(), "request rejected");
        err.status()
    };

    GatewayResponse {
        status,
        headers: cors.standard(),
        body: None,
    }
}
