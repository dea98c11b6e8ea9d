//! `itemgate-store` — persistence and secret-retrieval boundaries.
//!
//! The gateway core consumes storage and key retrieval exclusively through
//! the traits defined here. The in-memory implementations back local
//! development and tests; a real deployment substitutes its own backend
//! behind the same traits.

pub mod keys;
pub mod memory;
pub mod store;

pub use keys::{EnvKeyProvider, KeyProvider, KeyProviderError, StaticKeyProvider};
pub use memory::InMemoryItemStore;
pub use store::{ItemStore, StoreError};
