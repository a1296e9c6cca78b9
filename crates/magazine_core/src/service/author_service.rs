//! Author use-case service.
//!
//! # Responsibility
//! - Register authors and answer author-centric queries.
//!
//! # Invariants
//! - Queries are recomputed from the registries on every call.
//! - `magazines()` deduplicates by magazine identity, keeping first-seen order.
//! - `topic_areas()` is `None` exactly when the author has no articles.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::id::{AuthorId, EntityRef, MagazineId};
use crate::model::magazine::Magazine;
use crate::repo::catalog_repo::{CatalogRepository, RepoError, RepoResult};
use crate::service::article_service::register_article;
use log::{debug, info};
use std::collections::HashSet;

/// Use-case service for authors and their derived relationships.
pub struct AuthorService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> AuthorService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and registers an author.
    ///
    /// # Errors
    /// - `RepoError::Validation(EmptyAuthorName)` when `name` is empty.
    pub fn create_author(&self, name: impl Into<String>) -> RepoResult<Author> {
        let author = Author::new(name)?;
        self.repo.insert_author(&author)?;
        info!(
            "event=author_create module=catalog status=ok author_id={} name_chars={}",
            author.id(),
            author.name().chars().count()
        );
        Ok(author)
    }

    pub fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.repo.get_author(id)
    }

    pub fn list_authors(&self) -> RepoResult<Vec<Author>> {
        self.repo.list_authors()
    }

    /// Ignores a rename request and returns the author as stored.
    pub fn rename_author(&self, id: AuthorId, name: impl Into<String>) -> RepoResult<Author> {
        let mut author = require_author(&self.repo, id)?;
        author.set_name(name);
        debug!(
            "event=author_rename module=catalog status=ignored author_id={}",
            id
        );
        Ok(author)
    }

    /// All articles written by this author, in registry order.
    pub fn articles(&self, id: AuthorId) -> RepoResult<Vec<Article>> {
        require_author(&self.repo, id)?;
        articles_by_author(&self.repo, id)
    }

    /// Distinct magazines this author has written for.
    pub fn magazines(&self, id: AuthorId) -> RepoResult<Vec<Magazine>> {
        let articles = self.articles(id)?;
        magazines_of(&self.repo, &articles)
    }

    /// Writes a new article for this author.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when the author is not registered.
    /// - `RepoError::Validation` for a bad title or unregistered magazine.
    pub fn add_article(
        &self,
        id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<Article> {
        require_author(&self.repo, id)?;
        register_article(&self.repo, id, magazine_id, title.into())
    }

    /// Distinct categories of this author's magazines, or `None` without articles.
    pub fn topic_areas(&self, id: AuthorId) -> RepoResult<Option<Vec<String>>> {
        let articles = self.articles(id)?;
        if articles.is_empty() {
            return Ok(None);
        }

        let mut seen = HashSet::new();
        let categories: Vec<String> = magazines_of(&self.repo, &articles)?
            .into_iter()
            .map(|magazine| magazine.category().to_string())
            .filter(|category| seen.insert(category.clone()))
            .collect();
        Ok(Some(categories))
    }
}

fn require_author<R: CatalogRepository>(repo: &R, id: AuthorId) -> RepoResult<Author> {
    repo.get_author(id)?
        .ok_or(RepoError::NotFound(EntityRef::Author(id)))
}

fn articles_by_author<R: CatalogRepository>(
    repo: &R,
    id: AuthorId,
) -> RepoResult<Vec<Article>> {
    Ok(repo
        .list_articles()?
        .into_iter()
        .filter(|article| article.author_id() == id)
        .collect())
}

fn magazines_of<R: CatalogRepository>(repo: &R, articles: &[Article]) -> RepoResult<Vec<Magazine>> {
    let mut seen = HashSet::new();
    let mut magazines = Vec::new();
    for article in articles {
        let magazine_id = article.magazine_id();
        if !seen.insert(magazine_id) {
            continue;
        }
        let magazine = repo
            .get_magazine(magazine_id)?
            .ok_or(RepoError::NotFound(EntityRef::Magazine(magazine_id)))?;
        magazines.push(magazine);
    }
    Ok(magazines)
}
