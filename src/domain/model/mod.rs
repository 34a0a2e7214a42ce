//! Entities kept in the backing documents.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

pub mod author;
pub mod book;

pub use author::{Author, NewAuthor};
pub use book::{Book, NewBook};

/// Identifier type shared by both collections.
pub type RecordId = i64;

/// Which collection a record (or an error about one) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Author,
    Book,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Author => f.write_str("Author"),
            Entity::Book => f.write_str("Book"),
        }
    }
}

/// Contract for any record stored as one element of a backing document.
///
/// The store only needs the primary key to assign ids and to find records;
/// everything else is opaque JSON handled by serde.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The collection this record type lives in.
    const ENTITY: Entity;

    /// Returns the primary key of the record.
    fn id(&self) -> RecordId;
}

/// Next free id for a collection: `max(existing) + 1`, or `1` when empty.
///
/// Ids of deleted records are never handed out again as long as a higher id
/// is still present.
pub fn next_id<T: Record>(records: &[T]) -> RecordId {
    records.iter().map(|r| r.id()).max().unwrap_or(0) + 1
}
