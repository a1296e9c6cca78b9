//! Stable identifiers for catalog entities.
//!
//! Each entity kind gets its own newtype so an `AuthorId` can never be passed
//! where a `MagazineId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an identifier that already exists externally.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identity of one registered author.
    AuthorId
);
entity_id!(
    /// Identity of one registered magazine.
    MagazineId
);
entity_id!(
    /// Identity of one registered article.
    ArticleId
);

/// Reference to any catalog entity, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Author(AuthorId),
    Magazine(MagazineId),
    Article(ArticleId),
}

impl Display for EntityRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Author(id) => write!(f, "author {id}"),
            Self::Magazine(id) => write!(f, "magazine {id}"),
            Self::Article(id) => write!(f, "article {id}"),
        }
    }
}
