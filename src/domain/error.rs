//! Error signals raised by the stores.

use crate::domain::model::{Entity, RecordId};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this id exists in the entity's collection.
    #[error("{entity}(id={id}) Not Found")]
    NotFound { entity: Entity, id: RecordId },

    /// A uniqueness rule rejected the new record.
    ///
    /// `message` is the client-facing text; for books it is scoped to the author.
    #[error("{message}")]
    AlreadyExists {
        entity: Entity,
        name: String,
        message: String,
    },

    /// The backing document holds something other than a JSON array of records.
    #[error("backing document {} is corrupted: {source}", .path.display())]
    Corruption {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn not_found(entity: Entity, id: RecordId) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn author_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity: Entity::Author,
            name: name.into(),
            message: "Author with this name already exist".to_string(),
        }
    }

    pub fn book_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity: Entity::Book,
            name: name.into(),
            message: "Book with this name already exist for this Author".to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the two domain signals the boundary turns into typed results.
    pub fn is_domain_signal(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::AlreadyExists { .. })
    }
}
