//! Article entity: the join between one author and one magazine.
//!
//! # Invariants
//! - `title` is 5..=50 characters and never changes after construction.
//! - `author_id`/`magazine_id` are only checked against a registry by the
//!   repository layer; the model itself cannot see other entities.

use crate::model::id::{ArticleId, AuthorId, MagazineId};
use crate::model::validation::{check_title, ValidationError};
use serde::{Deserialize, Serialize};

/// One piece written by an author for a magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArticleRecord")]
pub struct Article {
    id: ArticleId,
    title: String,
    author_id: AuthorId,
    magazine_id: MagazineId,
}

#[derive(Deserialize)]
struct ArticleRecord {
    id: ArticleId,
    title: String,
    author_id: AuthorId,
    magazine_id: MagazineId,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = ValidationError;

    fn try_from(value: ArticleRecord) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.author_id, value.magazine_id, value.title)
    }
}

impl Article {
    /// Creates an article with a generated id.
    ///
    /// # Errors
    /// - `ValidationError::TitleLength` when `title` is outside 5..=50 chars.
    pub fn new(
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(ArticleId::new(), author_id, magazine_id, title)
    }

    /// Creates an article with a caller-provided id.
    pub fn with_id(
        id: ArticleId,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        check_title(&title)?;
        Ok(Self {
            id,
            title,
            author_id,
            magazine_id,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    /// Accepts a retitle request and discards it. Titles are fixed.
    pub fn set_title(&mut self, _title: impl Into<String>) {}

    /// Points this article at another author.
    ///
    /// Registry membership is enforced when the article is written back
    /// through `CatalogRepository::update_article`.
    pub fn set_author(&mut self, author_id: AuthorId) {
        self.author_id = author_id;
    }

    /// Points this article at another magazine.
    pub fn set_magazine(&mut self, magazine_id: MagazineId) {
        self.magazine_id = magazine_id;
    }
}
