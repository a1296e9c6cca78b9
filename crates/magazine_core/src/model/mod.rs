//! Catalog domain model.
//!
//! # Responsibility
//! - Define the three catalog entities and their stable identifiers.
//! - Own field validation rules shared by constructors and setters.
//!
//! # Invariants
//! - Entities can only be constructed in a valid state.
//! - Cross-entity references are identifiers, never embedded copies.
//! - Identity (not field values) decides whether two entities are the same.

pub mod article;
pub mod author;
pub mod id;
pub mod magazine;
pub mod validation;
