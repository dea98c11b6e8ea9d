//! `itemgate-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** types (no transport or storage
//! concerns): the item entity, the input payloads accepted from callers, and
//! the validation rules those payloads must pass.

pub mod error;
pub mod item;

pub use error::{DomainError, DomainResult};
pub use item::{Item, NewItem, UpdatedItem};
