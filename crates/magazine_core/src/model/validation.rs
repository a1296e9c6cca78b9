//! Field validation rules for catalog entities.
//!
//! # Invariants
//! - Lengths are counted in characters, not bytes.
//! - Bounds are inclusive on both ends.

use crate::model::id::{AuthorId, MagazineId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum author name length in characters.
pub const AUTHOR_NAME_MIN_CHARS: usize = 1;
/// Minimum magazine name length in characters.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Maximum magazine name length in characters.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Minimum article title length in characters.
pub const TITLE_MIN_CHARS: usize = 5;
/// Maximum article title length in characters.
pub const TITLE_MAX_CHARS: usize = 50;

/// Rejected input for an entity constructor or a raising setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name was empty.
    EmptyAuthorName,
    /// Magazine name length outside `2..=16` characters.
    MagazineNameLength { len: usize },
    /// Magazine category was empty.
    EmptyCategory,
    /// Article title length outside `5..=50` characters.
    TitleLength { len: usize },
    /// Referenced author is not registered in this catalog.
    UnknownAuthor(AuthorId),
    /// Referenced magazine is not registered in this catalog.
    UnknownMagazine(MagazineId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must be a non-empty string"),
            Self::MagazineNameLength { len } => write!(
                f,
                "magazine name must be between {MAGAZINE_NAME_MIN_CHARS} and \
                 {MAGAZINE_NAME_MAX_CHARS} characters, got {len}"
            ),
            Self::EmptyCategory => write!(f, "magazine category must be a non-empty string"),
            Self::TitleLength { len } => write!(
                f,
                "article title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} \
                 characters, got {len}"
            ),
            Self::UnknownAuthor(id) => write!(f, "author is not registered: {id}"),
            Self::UnknownMagazine(id) => write!(f, "magazine is not registered: {id}"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub(crate) fn check_author_name(name: &str) -> Result<(), ValidationError> {
    if char_len(name) < AUTHOR_NAME_MIN_CHARS {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub(crate) fn check_magazine_name(name: &str) -> Result<(), ValidationError> {
    let len = char_len(name);
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&len) {
        return Err(ValidationError::MagazineNameLength { len });
    }
    Ok(())
}

pub(crate) fn check_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub(crate) fn check_title(title: &str) -> Result<(), ValidationError> {
    let len = char_len(title);
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        return Err(ValidationError::TitleLength { len });
    }
    Ok(())
}
