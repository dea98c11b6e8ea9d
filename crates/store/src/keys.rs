//! Shared-secret retrieval boundary.

use std::sync::Arc;

use thiserror::Error;

/// Failure while retrieving the expected API key.
#[derive(Debug, Error)]
pub enum KeyProviderError {
    #[error("api key lookup failed: {0}")]
    Lookup(String),
}

/// Source of the expected API key.
///
/// `Ok(None)` means the provider is reachable but no key is configured; the
/// caller decides how severe that is.
pub trait KeyProvider: Send + Sync {
    fn api_key(&self) -> Result<Option<String>, KeyProviderError>;
}

impl<K> KeyProvider for Arc<K>
where
    K: KeyProvider + ?Sized,
{
    fn api_key(&self) -> Result<Option<String>, KeyProviderError> {
        (**self).api_key()
    }
}

/// Reads the key from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvKeyProvider {
    var: String,
}

impl EnvKeyProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl KeyProvider for EnvKeyProvider {
    fn api_key(&self) -> Result<Option<String>, KeyProviderError> {
        match std::env::var(&self.var) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(err) => Err(KeyProviderError::Lookup(format!("{}: {err}", self.var))),
        }
    }
}

/// Fixed key for tests and local development.
#[derive(Debug, Clone)]
pub struct StaticKeyProvider {
    key: String,
}

impl StaticKeyProvider {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl KeyProvider for StaticKeyProvider {
    fn api_key(&self) -> Result<Option<String>, KeyProviderError> {
        Ok(Some(self.key.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_provider_always_yields_its_key() {
        let keys = StaticKeyProvider::new("secret");
        assert_eq!(keys.api_key().unwrap().as_deref(), Some("secret"));
    }

    #[test]
    fn env_provider_reports_unset_as_absent() {
        let keys = EnvKeyProvider::new("ITEMGATE_TEST_KEY_THAT_IS_NEVER_SET");
        assert_eq!(keys.api_key().unwrap(), None);
    }
}
