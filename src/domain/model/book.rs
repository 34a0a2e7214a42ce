use super::{Entity, Record, RecordId};
use serde::{Deserialize, Serialize};

/// A stored book.
///
/// `author_id` is checked once, when the book is created. Removing the author
/// afterwards leaves the value in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: RecordId,
    pub author_id: RecordId,
    pub name: String,
}

impl Record for Book {
    const ENTITY: Entity = Entity::Book;

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Book input that already passed boundary validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub author_id: RecordId,
    pub name: String,
}
