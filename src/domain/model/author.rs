use super::{Entity, Record, RecordId};
use serde::{Deserialize, Serialize};

/// A stored author. Books point at it through `Book::author_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: RecordId,
    pub name: String,
}

impl Record for Author {
    const ENTITY: Entity = Entity::Author;

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Author input that already passed boundary validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
}
