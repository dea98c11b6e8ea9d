//! Normalized request/response shapes exchanged with the transport adapter.

use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode};
use serde::Serialize;

/// Transport-neutral view of one inbound HTTP request.
///
/// Header lookup through [`HeaderMap`] is case-insensitive by construction,
/// so no header name needs more than one spelling.
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub method: Method,
    /// Path identifier, present only when the request targets a single item.
    pub path_id: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl GatewayRequest {
    pub fn new(method: Method, path_id: Option<String>, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            method,
            path_id,
            headers,
            body,
        }
    }
}

/// Transport-neutral response: status, headers, optional JSON body.
///
/// Error responses never carry a body; the status code alone signals the
/// failure class.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

/// Success wire wrapper.
///
/// `errorMessage` is part of the published wire shape but never carries a
/// message: failures skip the envelope and answer with a bare status code.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            error_message: None,
        }
    }
}
