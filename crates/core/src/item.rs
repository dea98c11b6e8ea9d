//! The item entity and its input payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Shortest accepted `name`, in characters.
pub const NAME_MIN_CHARS: usize = 2;
/// Longest accepted `name`, in characters.
pub const NAME_MAX_CHARS: usize = 100;
/// Longest accepted `description`, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// A stored item.
///
/// The store owns `id` and `created_at`; callers never supply them. The wire
/// casing (`Id`, `createdAt`) is part of the published API and must not
/// change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "Id")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Payload accepted from a POST body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload accepted from a PUT body.
///
/// Full replacement; the same rules as [`NewItem`] apply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdatedItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewItem {
    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(&self.name, self.description.as_deref())
    }
}

impl UpdatedItem {
    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(&self.name, self.description.as_deref())
    }
}

fn validate_fields(name: &str, description: Option<&str>) -> DomainResult<()> {
    let name_chars = name.trim().chars().count();
    if name_chars < NAME_MIN_CHARS {
        return Err(DomainError::validation(format!(
            "name must be at least {NAME_MIN_CHARS} characters"
        )));
    }
    if name_chars > NAME_MAX_CHARS {
        return Err(DomainError::validation(format!(
            "name must be at most {NAME_MAX_CHARS} characters"
        )));
    }
    if let Some(description) = description {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "description must be at most {DESCRIPTION_MAX_CHARS} characters"
            )));
        }
    }
    Ok(())
}
