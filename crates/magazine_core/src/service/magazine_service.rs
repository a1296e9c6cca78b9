//! Magazine use-case service.
//!
//! # Responsibility
//! - Register magazines and apply lenient name/category updates.
//! - Answer magazine-centric and registry-wide queries.
//!
//! # Invariants
//! - Invalid name/category updates are dropped without an error.
//! - `contributors()` deduplicates by author identity, keeping first-seen order.
//! - `top_publisher()` keeps the first magazine (registry order) among ties.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::id::{AuthorId, EntityRef, MagazineId};
use crate::model::magazine::Magazine;
use crate::repo::catalog_repo::{CatalogRepository, RepoError, RepoResult};
use log::{debug, info};
use std::collections::{HashMap, HashSet};

/// Authors need strictly more articles than this in one magazine to count as
/// contributing authors.
pub const CONTRIBUTING_AUTHOR_MIN_ARTICLES: usize = 2;

/// Use-case service for magazines and their derived relationships.
pub struct MagazineService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> MagazineService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and registers a magazine.
    ///
    /// # Errors
    /// - `RepoError::Validation` when name length is outside 2..=16 or
    ///   category is empty.
    pub fn create_magazine(
        &self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> RepoResult<Magazine> {
        let magazine = Magazine::new(name, category)?;
        self.repo.insert_magazine(&magazine)?;
        info!(
            "event=magazine_create module=catalog status=ok magazine_id={}",
            magazine.id()
        );
        Ok(magazine)
    }

    pub fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        self.repo.get_magazine(id)
    }

    pub fn list_magazines(&self) -> RepoResult<Vec<Magazine>> {
        self.repo.list_magazines()
    }

    /// Renames a magazine; invalid names leave it unchanged.
    ///
    /// Returns the magazine as stored after the call.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when the magazine is not registered. An invalid
    ///   name is never an error.
    pub fn set_name(&self, id: MagazineId, name: impl Into<String>) -> RepoResult<Magazine> {
        let mut magazine = require_magazine(&self.repo, id)?;
        let applied = magazine.set_name(name);
        self.write_back(magazine, applied, "name")
    }

    /// Recategorizes a magazine; empty categories leave it unchanged.
    pub fn set_category(
        &self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> RepoResult<Magazine> {
        let mut magazine = require_magazine(&self.repo, id)?;
        let applied = magazine.set_category(category);
        self.write_back(magazine, applied, "category")
    }

    /// All articles published in this magazine, in registry order.
    pub fn articles(&self, id: MagazineId) -> RepoResult<Vec<Article>> {
        require_magazine(&self.repo, id)?;
        Ok(self
            .repo
            .list_articles()?
            .into_iter()
            .filter(|article| article.magazine_id() == id)
            .collect())
    }

    /// Distinct authors who have written for this magazine.
    pub fn contributors(&self, id: MagazineId) -> RepoResult<Vec<Author>> {
        let articles = self.articles(id)?;
        let mut seen = HashSet::new();
        let mut authors = Vec::new();
        for article in &articles {
            let author_id = article.author_id();
            if !seen.insert(author_id) {
                continue;
            }
            authors.push(require_referenced_author(&self.repo, author_id)?);
        }
        Ok(authors)
    }

    /// Titles of this magazine's articles in registry order, or `None` when
    /// it has none.
    pub fn article_titles(&self, id: MagazineId) -> RepoResult<Option<Vec<String>>> {
        let articles = self.articles(id)?;
        if articles.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            articles
                .iter()
                .map(|article| article.title().to_string())
                .collect(),
        ))
    }

    /// Authors with more than two articles in this magazine, or `None` when
    /// nobody qualifies.
    pub fn contributing_authors(&self, id: MagazineId) -> RepoResult<Option<Vec<Author>>> {
        let articles = self.articles(id)?;
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in &articles {
            *counts.entry(article.author_id()).or_default() += 1;
        }

        let qualifying: Vec<Author> = self
            .contributors(id)?
            .into_iter()
            .filter(|author| {
                counts.get(&author.id()).copied().unwrap_or(0) > CONTRIBUTING_AUTHOR_MIN_ARTICLES
            })
            .collect();

        if qualifying.is_empty() {
            return Ok(None);
        }
        Ok(Some(qualifying))
    }

    /// Magazine with the most articles across the whole catalog.
    ///
    /// Returns `None` when no article exists anywhere.
    pub fn top_publisher(&self) -> RepoResult<Option<Magazine>> {
        let articles = self.repo.list_articles()?;
        if articles.is_empty() {
            return Ok(None);
        }

        let mut counts: HashMap<MagazineId, usize> = HashMap::new();
        for article in &articles {
            *counts.entry(article.magazine_id()).or_default() += 1;
        }

        let mut top: Option<(Magazine, usize)> = None;
        for magazine in self.repo.list_magazines()? {
            let count = counts.get(&magazine.id()).copied().unwrap_or(0);
            // strict comparison keeps the earliest magazine on ties
            if top.as_ref().map_or(true, |(_, best)| count > *best) {
                top = Some((magazine, count));
            }
        }
        Ok(top.map(|(magazine, _)| magazine))
    }

    fn write_back(&self, magazine: Magazine, applied: bool, field: &str) -> RepoResult<Magazine> {
        if !applied {
            debug!(
                "event=magazine_update module=catalog status=ignored magazine_id={} field={}",
                magazine.id(),
                field
            );
            return Ok(magazine);
        }

        self.repo.update_magazine(&magazine)?;
        info!(
            "event=magazine_update module=catalog status=ok magazine_id={} field={}",
            magazine.id(),
            field
        );
        Ok(magazine)
    }
}

fn require_magazine<R: CatalogRepository>(repo: &R, id: MagazineId) -> RepoResult<Magazine> {
    repo.get_magazine(id)?
        .ok_or(RepoError::NotFound(EntityRef::Magazine(id)))
}

fn require_referenced_author<R: CatalogRepository>(
    repo: &R,
    id: AuthorId,
) -> RepoResult<Author> {
    repo.get_author(id)?
        .ok_or(RepoError::NotFound(EntityRef::Author(id)))
}
