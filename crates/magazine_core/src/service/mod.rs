//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into entity operations and derived queries.
//! - Keep callers decoupled from how registries are stored.

pub mod article_service;
pub mod author_service;
pub mod magazine_service;
