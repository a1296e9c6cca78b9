//! Author entity.
//!
//! # Invariants
//! - `name` is non-empty and never changes after construction.

use crate::model::id::AuthorId;
use crate::model::validation::{check_author_name, ValidationError};
use serde::{Deserialize, Serialize};

/// A person who writes articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorRecord")]
pub struct Author {
    id: AuthorId,
    name: String,
}

#[derive(Deserialize)]
struct AuthorRecord {
    id: AuthorId,
    name: String,
}

impl TryFrom<AuthorRecord> for Author {
    type Error = ValidationError;

    fn try_from(value: AuthorRecord) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.name)
    }
}

impl Author {
    /// Creates an author with a generated id.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(AuthorId::new(), name)
    }

    /// Creates an author with a caller-provided id.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        check_author_name(&name)?;
        Ok(Self { id, name })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepts a rename request and discards it.
    ///
    /// Author names are fixed at construction; the call never fails and
    /// never mutates.
    pub fn set_name(&mut self, _name: impl Into<String>) {}
}
