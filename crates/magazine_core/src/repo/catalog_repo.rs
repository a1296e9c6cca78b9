//! Catalog registry contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered author/magazine/article registries.
//! - Enforce reference integrity on every article write.
//!
//! # Invariants
//! - `list_*` returns entities in insertion order.
//! - Article writes with an unknown author or magazine are rejected with
//!   `ValidationError` and leave the registry untouched.
//! - Ids are unique per registry.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::id::{ArticleId, AuthorId, EntityRef, MagazineId};
use crate::model::magazine::Magazine;
use crate::model::validation::ValidationError;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for registry writes and catalog queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Input or reference failed validation.
    Validation(ValidationError),
    /// The entity an operation is about is not registered.
    NotFound(EntityRef),
    /// An entity with the same id is already registered.
    DuplicateId(EntityRef),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(entity) => write!(f, "{entity} not found"),
            Self::DuplicateId(entity) => write!(f, "{entity} is already registered"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage contract for the three catalog registries.
pub trait CatalogRepository {
    fn insert_author(&self, author: &Author) -> RepoResult<AuthorId>;
    fn insert_magazine(&self, magazine: &Magazine) -> RepoResult<MagazineId>;
    /// Registers an article after checking its author and magazine exist.
    fn insert_article(&self, article: &Article) -> RepoResult<ArticleId>;
    fn update_magazine(&self, magazine: &Magazine) -> RepoResult<()>;
    /// Replaces a stored article after checking its author and magazine exist.
    fn update_article(&self, article: &Article) -> RepoResult<()>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>>;
    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>>;
    fn list_authors(&self) -> RepoResult<Vec<Author>>;
    fn list_magazines(&self) -> RepoResult<Vec<Magazine>>;
    fn list_articles(&self) -> RepoResult<Vec<Article>>;
}

impl<R: CatalogRepository + ?Sized> CatalogRepository for &R {
    fn insert_author(&self, author: &Author) -> RepoResult<AuthorId> {
        (**self).insert_author(author)
    }

    fn insert_magazine(&self, magazine: &Magazine) -> RepoResult<MagazineId> {
        (**self).insert_magazine(magazine)
    }

    fn insert_article(&self, article: &Article) -> RepoResult<ArticleId> {
        (**self).insert_article(article)
    }

    fn update_magazine(&self, magazine: &Magazine) -> RepoResult<()> {
        (**self).update_magazine(magazine)
    }

    fn update_article(&self, article: &Article) -> RepoResult<()> {
        (**self).update_article(article)
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        (**self).get_author(id)
    }

    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        (**self).get_magazine(id)
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        (**self).get_article(id)
    }

    fn list_authors(&self) -> RepoResult<Vec<Author>> {
        (**self).list_authors()
    }

    fn list_magazines(&self) -> RepoResult<Vec<Magazine>> {
        (**self).list_magazines()
    }

    fn list_articles(&self) -> RepoResult<Vec<Article>> {
        (**self).list_articles()
    }
}

/// Single-threaded in-memory registries.
///
/// Each catalog context owns one of these; there is no process-wide state.
#[derive(Debug, Default)]
pub struct InMemoryCatalogRepository {
    authors: RefCell<Vec<Author>>,
    magazines: RefCell<Vec<Magazine>>,
    articles: RefCell<Vec<Article>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_references(&self, article: &Article) -> RepoResult<()> {
        let author_id = article.author_id();
        if !self.authors.borrow().iter().any(|a| a.id() == author_id) {
            return Err(ValidationError::UnknownAuthor(author_id).into());
        }
        let magazine_id = article.magazine_id();
        if !self.magazines.borrow().iter().any(|m| m.id() == magazine_id) {
            return Err(ValidationError::UnknownMagazine(magazine_id).into());
        }
        Ok(())
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn insert_author(&self, author: &Author) -> RepoResult<AuthorId> {
        let mut authors = self.authors.borrow_mut();
        if authors.iter().any(|a| a.id() == author.id()) {
            return Err(RepoError::DuplicateId(EntityRef::Author(author.id())));
        }
        authors.push(author.clone());
        Ok(author.id())
    }

    fn insert_magazine(&self, magazine: &Magazine) -> RepoResult<MagazineId> {
        let mut magazines = self.magazines.borrow_mut();
        if magazines.iter().any(|m| m.id() == magazine.id()) {
            return Err(RepoError::DuplicateId(EntityRef::Magazine(magazine.id())));
        }
        magazines.push(magazine.clone());
        Ok(magazine.id())
    }

    fn insert_article(&self, article: &Article) -> RepoResult<ArticleId> {
        self.ensure_references(article)?;

        let mut articles = self.articles.borrow_mut();
        if articles.iter().any(|a| a.id() == article.id()) {
            return Err(RepoError::DuplicateId(EntityRef::Article(article.id())));
        }
        articles.push(article.clone());
        Ok(article.id())
    }

    fn update_magazine(&self, magazine: &Magazine) -> RepoResult<()> {
        let mut magazines = self.magazines.borrow_mut();
        let slot = magazines
            .iter_mut()
            .find(|m| m.id() == magazine.id())
            .ok_or(RepoError::NotFound(EntityRef::Magazine(magazine.id())))?;
        *slot = magazine.clone();
        Ok(())
    }

    fn update_article(&self, article: &Article) -> RepoResult<()> {
        self.ensure_references(article)?;

        let mut articles = self.articles.borrow_mut();
        let slot = articles
            .iter_mut()
            .find(|a| a.id() == article.id())
            .ok_or(RepoError::NotFound(EntityRef::Article(article.id())))?;
        *slot = article.clone();
        Ok(())
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        Ok(self.authors.borrow().iter().find(|a| a.id() == id).cloned())
    }

    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        Ok(self
            .magazines
            .borrow()
            .iter()
            .find(|m| m.id() == id)
            .cloned())
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        Ok(self.articles.borrow().iter().find(|a| a.id() == id).cloned())
    }

    fn list_authors(&self) -> RepoResult<Vec<Author>> {
        Ok(self.authors.borrow().clone())
    }

    fn list_magazines(&self) -> RepoResult<Vec<Magazine>> {
        Ok(self.magazines.borrow().clone())
    }

    fn list_articles(&self) -> RepoResult<Vec<Article>> {
        Ok(self.articles.borrow().clone())
    }
}
