//! Axum transport adapter.
//!
//! Turns platform HTTP requests into normalized gateway requests and
//! serializes gateway responses back out. All decision logic (auth, method
//! dispatch, OPTIONS, 405) lives in the [`dispatcher`]; the routes here are
//! deliberately method-agnostic.

pub mod dispatcher;
pub mod dto;
pub mod errors;
pub mod headers;

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, Method, header::InvalidHeaderValue},
    response::{IntoResponse, Response},
    routing::any,
};

use itemgate_store::{ItemStore, KeyProvider};

use crate::config::GatewayConfig;
use self::dispatcher::Dispatcher;
use self::dto::{GatewayRequest, GatewayResponse};

/// Build the HTTP application around a dispatcher.
///
/// Fails only when a configured CORS value is not a legal header value.
pub fn build_app(
    config: GatewayConfig,
    store: Arc<dyn ItemStore>,
    keys: Arc<dyn KeyProvider>,
) -> Result<Router, InvalidHeaderValue> {
    let collection_path = format!("/{}", config.resource);
    let member_path = format!("/{}/:id", config.resource);

    let dispatcher = Arc::new(Dispatcher::new(config, store, keys)?);

    Ok(Router::new()
        .route(&collection_path, any(collection))
        .route(&member_path, any(member))
        .with_state(dispatcher))
}

async fn collection(
    State(dispatcher): State<Arc<Dispatcher>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    dispatcher
        .handle(GatewayRequest::new(method, None, headers, body))
        .into_response()
}

async fn member(
    State(dispatcher): State<Arc<Dispatcher>>,
    method: Method,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    dispatcher
        .handle(GatewayRequest::new(method, Some(id), headers, body))
        .into_response()
}

impl IntoResponse for GatewayResponse {
    fn into_response(self) -> Response {
        let mut response = match self.body {
            Some(body) => (self.status, body).into_response(),
            None => self.status.into_response(),
        };
        response.headers_mut().extend(self.headers);
        response
    }
}
