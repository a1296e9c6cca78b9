//! Article use-case service.
//!
//! # Responsibility
//! - Create articles and re-point them at other authors/magazines.
//!
//! # Invariants
//! - Title is validated before author, author before magazine.
//! - A rejected reassignment leaves the stored article unchanged.

use crate::model::article::Article;
use crate::model::id::{ArticleId, AuthorId, EntityRef, MagazineId};
use crate::repo::catalog_repo::{CatalogRepository, RepoError, RepoResult};
use log::{debug, info};

/// Use-case service for the article registry.
pub struct ArticleService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> ArticleService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and registers an article.
    ///
    /// # Errors
    /// - `RepoError::Validation` for a bad title or unregistered author/magazine.
    pub fn create_article(
        &self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<Article> {
        register_article(&self.repo, author_id, magazine_id, title.into())
    }

    pub fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        self.repo.get_article(id)
    }

    pub fn list_articles(&self) -> RepoResult<Vec<Article>> {
        self.repo.list_articles()
    }

    /// Ignores a retitle request and returns the article as stored.
    pub fn retitle_article(&self, id: ArticleId, title: impl Into<String>) -> RepoResult<Article> {
        let mut article = require_article(&self.repo, id)?;
        article.set_title(title);
        debug!(
            "event=article_retitle module=catalog status=ignored article_id={}",
            id
        );
        Ok(article)
    }

    /// Re-points an article at another registered author.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when the article is not registered.
    /// - `RepoError::Validation(UnknownAuthor)` when the author is not registered.
    pub fn set_author(&self, id: ArticleId, author_id: AuthorId) -> RepoResult<Article> {
        let mut article = require_article(&self.repo, id)?;
        article.set_author(author_id);
        self.write_back(article, "author")
    }

    /// Re-points an article at another registered magazine.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when the article is not registered.
    /// - `RepoError::Validation(UnknownMagazine)` when the magazine is not registered.
    pub fn set_magazine(&self, id: ArticleId, magazine_id: MagazineId) -> RepoResult<Article> {
        let mut article = require_article(&self.repo, id)?;
        article.set_magazine(magazine_id);
        self.write_back(article, "magazine")
    }

    fn write_back(&self, article: Article, field: &str) -> RepoResult<Article> {
        match self.repo.update_article(&article) {
            Ok(()) => {
                info!(
                    "event=article_update module=catalog status=ok article_id={} field={}",
                    article.id(),
                    field
                );
                Ok(article)
            }
            Err(err) => {
                debug!(
                    "event=article_update module=catalog status=rejected article_id={} field={} reason={}",
                    article.id(),
                    field,
                    err
                );
                Err(err)
            }
        }
    }
}

pub(crate) fn register_article<R: CatalogRepository>(
    repo: &R,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: String,
) -> RepoResult<Article> {
    let article = Article::new(author_id, magazine_id, title)?;
    repo.insert_article(&article)?;
    info!(
        "event=article_create module=catalog status=ok article_id={} author_id={} magazine_id={}",
        article.id(),
        author_id,
        magazine_id
    );
    Ok(article)
}

fn require_article<R: CatalogRepository>(repo: &R, id: ArticleId) -> RepoResult<Article> {
    repo.get_article(id)?
        .ok_or(RepoError::NotFound(EntityRef::Article(id)))
}
