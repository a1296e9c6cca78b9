//! Core domain logic for the magazine catalog.
//! Authors write articles that are published in magazines; this crate owns
//! the registries and every derived query over them.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::article::Article;
pub use model::author::Author;
pub use model::id::{ArticleId, AuthorId, EntityRef, MagazineId};
pub use model::magazine::Magazine;
pub use model::validation::ValidationError;
pub use repo::catalog_repo::{CatalogRepository, InMemoryCatalogRepository, RepoError, RepoResult};
pub use service::article_service::ArticleService;
pub use service::author_service::AuthorService;
pub use service::magazine_service::MagazineService;

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
