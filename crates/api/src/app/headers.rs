//! Response header assembly.

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE, HeaderMap, HeaderValue, InvalidHeaderValue,
};

use crate::config::GatewayConfig;

/// Fixed header sets shared by every response.
///
/// Built once from config when the dispatcher is wired up; per-route
/// additions (`Location`, preflight headers) are merged on top.
#[derive(Debug, Clone)]
pub struct CorsHeaders {
    standard: HeaderMap,
    preflight: HeaderMap,
}

impl CorsHeaders {
    /// Build the fixed sets from config.
    ///
    /// Fails only when a configured value is not a legal header value.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, InvalidHeaderValue> {
        let mut standard = HeaderMap::new();
        standard.insert(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_str(&config.allowed_origin)?,
        );
        standard.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_str(&config.allowed_headers)?,
        );

        let mut preflight = HeaderMap::new();
        preflight.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_str(&config.allowed_methods)?,
        );
        preflight.insert(
            ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from(config.preflight_max_age_secs),
        );

        Ok(Self {
            standard,
            preflight,
        })
    }

    /// Headers attached to every response.
    pub fn standard(&self) -> HeaderMap {
        self.standard.clone()
    }

    /// Standard set plus the preflight-only headers.
    pub fn preflight(&self) -> HeaderMap {
        merge_headers(self.standard(), self.preflight.clone())
    }
}

/// Key-wise union of two header sets; `extra` wins on collision.
pub fn merge_headers(base: HeaderMap, extra: HeaderMap) -> HeaderMap {
    let mut merged = base;
    for (name, value) in extra.iter() {
        merged.insert(name.clone(), value.clone());
    }
    merged
}
