//! The dispatch-and-mediation core: authentication, method routing, and the
//! translation between wire shapes and store operations.

use std::sync::Arc;

use axum::http::header::{CONTENT_TYPE, InvalidHeaderValue, LOCATION};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use itemgate_core::{NewItem, UpdatedItem};
use itemgate_store::{ItemStore, KeyProvider};

use crate::app::dto::{Envelope, GatewayRequest, GatewayResponse};
use crate::app::errors::{self, GatewayError};
use crate::app::headers::{CorsHeaders, merge_headers};
use crate::config::GatewayConfig;

/// Per-request dispatcher in front of the item store.
///
/// Holds only process-lifetime configuration and the injected collaborators;
/// nothing survives a request, so concurrent invocations need no
/// synchronization here.
pub struct Dispatcher {
    store: Arc<dyn ItemStore>,
    keys: Arc<dyn KeyProvider>,
    config: GatewayConfig,
    cors: CorsHeaders,
}

impl Dispatcher {
    /// Wire up a dispatcher.
    ///
    /// Fails only when a configured CORS value is not a legal header value.
    pub fn new(
        config: GatewayConfig,
        store: Arc<dyn ItemStore>,
        keys: Arc<dyn KeyProvider>,
    ) -> Result<Self, InvalidHeaderValue> {
        let cors = CorsHeaders::from_config(&config)?;
        Ok(Self {
            store,
            keys,
            config,
            cors,
        })
    }

    /// Handle one normalized request.
    ///
    /// Every branch terminates in exactly one response; errors collapse into
    /// bare-status responses here and never escape.
    pub fn handle(&self, req: GatewayRequest) -> GatewayResponse {
        tracing::info!(method = %req.method, "dispatching request");
        match self.dispatch(&req) {
            Ok(response) => response,
            Err(err) => errors::error_response(err, &self.cors),
        }
    }

    fn dispatch(&self, req: &GatewayRequest) -> Result<GatewayResponse, GatewayError> {
        // The key check gates everything, preflight included.
        self.authenticate(&req.headers)?;

        match req.method {
            Method::GET => self.read(req),
            Method::POST => self.create(req),
            Method::PUT => self.update(req),
            Method::DELETE => self.delete(req),
            Method::OPTIONS => Ok(self.preflight()),
            _ => Err(GatewayError::MethodNotAllowed),
        }
    }

    fn authenticate(&self, headers: &HeaderMap) -> Result<(), GatewayError> {
        let expected = self
            .keys
            .api_key()?
            .ok_or(GatewayError::KeyNotConfigured)?;

        let provided = headers
            .get(self.config.api_key_header.as_str())
            .and_then(|value| value.to_str().ok());

        match provided {
            Some(provided) if provided == expected => Ok(()),
            _ => Err(GatewayError::Unauthorized),
        }
    }

    fn read(&self, req: &GatewayRequest) -> Result<GatewayResponse, GatewayError> {
        match req.path_id.as_deref() {
            Some(id) => {
                let item = self.store.get(id)?.ok_or(GatewayError::NotFound)?;
                self.envelope(StatusCode::OK, &item, self.cors.standard())
            }
            // An empty collection is a valid listing, never a 404.
            None => {
                let items = self.store.list()?;
                self.envelope(StatusCode::OK, &items, self.cors.standard())
            }
        }
    }

    fn create(&self, req: &GatewayRequest) -> Result<GatewayResponse, GatewayError> {
        let payload: NewItem = decode(&req.body)?;
        payload.validate()?;

        let item = self.store.insert(payload)?;
        let headers = merge_headers(self.cors.standard(), self.location(&item.id)?);
        self.envelope(StatusCode::CREATED, &item, headers)
    }

    fn update(&self, req: &GatewayRequest) -> Result<GatewayResponse, GatewayError> {
        let id = req.path_id.as_deref().ok_or(GatewayError::MissingPathId)?;

        let payload: UpdatedItem = decode(&req.body)?;
        payload.validate()?;

        let item = self
            .store
            .update(id, payload)?
            .ok_or(GatewayError::NotFound)?;
        let headers = merge_headers(self.cors.standard(), self.location(&item.id)?);
        self.envelope(StatusCode::OK, &item, headers)
    }

    fn delete(&self, req: &GatewayRequest) -> Result<GatewayResponse, GatewayError> {
        let id = req.path_id.as_deref().ok_or(GatewayError::MissingPathId)?;

        let item = self.store.delete(id)?.ok_or(GatewayError::NotFound)?;
        self.envelope(StatusCode::OK, &item, self.cors.standard())
    }

    fn preflight(&self) -> GatewayResponse {
        GatewayResponse {
            status: StatusCode::OK,
            headers: self.cors.preflight(),
            body: None,
        }
    }

    fn envelope<T: Serialize>(
        &self,
        status: StatusCode,
        data: &T,
        headers: HeaderMap,
    ) -> Result<GatewayResponse, GatewayError> {
        let body = serde_json::to_string(&Envelope::new(data)).map_err(GatewayError::Encode)?;

        let mut headers = headers;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(GatewayResponse {
            status,
            headers,
            body: Some(body),
        })
    }

    fn location(&self, id: &str) -> Result<HeaderMap, GatewayError> {
        let value = HeaderValue::from_str(&format!("/{}/{}", self.config.resource, id))?;
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, value);
        Ok(headers)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, GatewayError> {
    serde_json::from_slice(body).map_err(GatewayError::MalformedBody)
}
