//! Gateway configuration.
//!
//! Constructed once at startup and injected into the dispatcher; never
//! mutated afterwards.

/// Static configuration for the gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Path segment of the item collection (`/{resource}` and
    /// `/{resource}/{id}`); also the base of the `Location` header.
    pub resource: String,
    /// Value of `Access-Control-Allow-Origin` on every response.
    pub allowed_origin: String,
    /// Value of `Access-Control-Allow-Headers` on every response.
    pub allowed_headers: String,
    /// Value of `Access-Control-Allow-Methods` on preflight responses.
    pub allowed_methods: String,
    /// Value of `Access-Control-Max-Age` on preflight responses, in seconds.
    pub preflight_max_age_secs: u32,
    /// Name of the request header carrying the shared-secret API key.
    pub api_key_header: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            resource: "items".to_string(),
            allowed_origin: "*".to_string(),
            allowed_headers: "Content-Type".to_string(),
            allowed_methods: "OPTIONS, POST, GET, PUT, DELETE".to_string(),
            preflight_max_age_secs: 3600,
            api_key_header: "x-api-key".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Configuration from `ITEMGATE_*` environment variables, falling back
    /// to the defaults field by field.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(resource) = std::env::var("ITEMGATE_RESOURCE") {
            config.resource = resource;
        }
        if let Ok(origin) = std::env::var("ITEMGATE_ALLOWED_ORIGIN") {
            config.allowed_origin = origin;
        }
        config
    }
}
