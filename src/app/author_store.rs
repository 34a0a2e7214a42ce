//! The author collection.
//!
//! Owns `authors.json` and the rules that apply to it: store-assigned ids and
//! case-insensitive name uniqueness.

use crate::domain::error::{StoreError, StoreResult};
use crate::domain::model::{next_id, Author, Entity, NewAuthor, RecordId};
use crate::infra::config::Settings;
use crate::storage::JsonDocument;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub struct AuthorStore {
    document: JsonDocument<Author>,
}

impl AuthorStore {
    pub fn new(settings: &Settings) -> Self {
        Self::open(settings.authors_path(), settings.serialize_writes)
    }

    pub fn open(path: impl Into<PathBuf>, serialize_writes: bool) -> Self {
        Self {
            document: JsonDocument::new(path, serialize_writes),
        }
    }

    pub async fn list(&self) -> StoreResult<Vec<Author>> {
        self.document.read_all().await
    }

    pub async fn get(&self, id: RecordId) -> StoreResult<Author> {
        let authors = self.list().await?;
        find(authors, id)
    }

    /// Inserts a new author with the next free id.
    ///
    /// Fails with [`StoreError::AlreadyExists`] if an author with the same name
    /// (ignoring case) is already stored.
    pub async fn create(&self, input: NewAuthor) -> StoreResult<Author> {
        let _guard = self.document.lock_writes().await;
        let mut authors = self.list().await?;

        let wanted = input.name.to_lowercase();
        if authors.iter().any(|a| a.name.to_lowercase() == wanted) {
            return Err(StoreError::author_exists(input.name));
        }

        let author = Author {
            id: next_id(&authors),
            name: input.name,
        };
        authors.push(author.clone());
        self.document.write_all(&authors).await?;

        info!(author_id = author.id, name = %author.name, "author created");
        Ok(author)
    }

    /// Removes the author. Books that reference it are left untouched.
    pub async fn delete(&self, id: RecordId) -> StoreResult<()> {
        let _guard = self.document.lock_writes().await;
        let mut authors = self.list().await?;

        if !authors.iter().any(|a| a.id == id) {
            return Err(StoreError::not_found(Entity::Author, id));
        }
        authors.retain(|a| a.id != id);
        self.document.write_all(&authors).await?;

        info!(author_id = id, "author deleted");
        Ok(())
    }
}

fn find(authors: Vec<Author>, id: RecordId) -> StoreResult<Author> {
    authors
        .into_iter()
        .find(|a| a.id == id)
        .ok_or_else(|| StoreError::not_found(Entity::Author, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> AuthorStore {
        AuthorStore::new(&Settings::with_database_path(dir.path()))
    }

    fn new_author(name: &str) -> NewAuthor {
        NewAuthor {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn list_of_fresh_store_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let authors = store(&dir);

        let created = authors.create(new_author("George Orwell")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(authors.get(created.id).await.unwrap(), created);
        assert_eq!(authors.list().await.unwrap(), authors.list().await.unwrap());
    }

    #[tokio::test]
    async fn names_are_unique_ignoring_case() {
        let dir = TempDir::new().unwrap();
        let authors = store(&dir);

        authors.create(new_author("Orwell")).await.unwrap();
        let err = authors.create(new_author("orwell")).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::AlreadyExists {
                entity: Entity::Author,
                ..
            }
        ));
        assert_eq!(authors.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let dir = TempDir::new().unwrap();
        let authors = store(&dir);

        for name in ["One", "Two", "Three"] {
            authors.create(new_author(name)).await.unwrap();
        }
        authors.delete(2).await.unwrap();
        let fourth = authors.create(new_author("Four")).await.unwrap();
        assert_eq!(fourth.id, 4);

        let ids: Vec<_> = authors.list().await.unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn get_and_delete_unknown_id_report_not_found() {
        let dir = TempDir::new().unwrap();
        let authors = store(&dir);
        authors.create(new_author("Kept")).await.unwrap();

        let err = authors.get(-9999999).await.unwrap_err();
        assert_eq!(err.to_string(), "Author(id=-9999999) Not Found");

        let err = authors.delete(42).await.unwrap_err();
        assert_eq!(err.to_string(), "Author(id=42) Not Found");
        assert_eq!(authors.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_drops_every_record_sharing_the_id() {
        let dir = TempDir::new().unwrap();
        let authors = store(&dir);
        std::fs::write(
            dir.path().join("authors.json"),
            r#"[{"id": 1, "name": "A"}, {"id": 2, "name": "B"}, {"id": 2, "name": "C"}]"#,
        )
        .unwrap();

        authors.delete(2).await.unwrap();
        assert_eq!(
            authors.list().await.unwrap(),
            vec![Author {
                id: 1,
                name: "A".to_string()
            }]
        );
        assert!(matches!(
            authors.delete(2).await,
            Err(StoreError::NotFound {
                entity: Entity::Author,
                id: 2
            })
        ));
    }

    #[tokio::test]
    async fn corrupted_document_fails_every_operation() {
        let dir = TempDir::new().unwrap();
        let authors = store(&dir);
        std::fs::write(dir.path().join("authors.json"), "not json").unwrap();

        assert!(matches!(authors.list().await, Err(StoreError::Corruption { .. })));
        assert!(matches!(authors.get(1).await, Err(StoreError::Corruption { .. })));
        assert!(matches!(
            authors.create(new_author("Someone")).await,
            Err(StoreError::Corruption { .. })
        ));
        // the broken document is left as-is
        assert_eq!(
            std::fs::read_to_string(dir.path().join("authors.json")).unwrap(),
            "not json"
        );
    }
}
