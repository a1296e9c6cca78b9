//! Magazine entity.
//!
//! # Invariants
//! - `name` is 2..=16 characters and `category` is non-empty at all times.
//! - Setters drop invalid values without reporting an error; only
//!   construction rejects bad input.

use crate::model::id::MagazineId;
use crate::model::validation::{check_category, check_magazine_name, ValidationError};
use serde::{Deserialize, Serialize};

/// A publication that articles appear in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MagazineRecord")]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

#[derive(Deserialize)]
struct MagazineRecord {
    id: MagazineId,
    name: String,
    category: String,
}

impl TryFrom<MagazineRecord> for Magazine {
    type Error = ValidationError;

    fn try_from(value: MagazineRecord) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.name, value.category)
    }
}

impl Magazine {
    /// Creates a magazine with a generated id.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` when `name` is outside 2..=16 chars.
    /// - `ValidationError::EmptyCategory` when `category` is empty.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(MagazineId::new(), name, category)
    }

    /// Creates a magazine with a caller-provided id.
    pub fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        check_magazine_name(&name)?;
        check_category(&category)?;
        Ok(Self { id, name, category })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the name when valid; invalid names are ignored.
    ///
    /// Returns whether the value was applied.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if check_magazine_name(&name).is_err() {
            return false;
        }
        self.name = name;
        true
    }

    /// Replaces the category when non-empty; empty values are ignored.
    ///
    /// Returns whether the value was applied.
    pub fn set_category(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if check_category(&category).is_err() {
            return false;
        }
        self.category = category;
        true
    }
}
