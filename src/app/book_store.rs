//! The book collection.
//!
//! Same persistence rules as the author collection, plus a referential check:
//! a book can only be created for an author that exists at that moment.

use crate::app::author_store::AuthorStore;
use crate::domain::error::{StoreError, StoreResult};
use crate::domain::model::{next_id, Book, Entity, NewBook, RecordId};
use crate::infra::config::Settings;
use crate::storage::JsonDocument;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub struct BookStore {
    document: JsonDocument<Book>,
    authors: Arc<AuthorStore>,
}

impl BookStore {
    pub fn new(settings: &Settings, authors: Arc<AuthorStore>) -> Self {
        Self::open(settings.books_path(), settings.serialize_writes, authors)
    }

    pub fn open(path: impl Into<PathBuf>, serialize_writes: bool, authors: Arc<AuthorStore>) -> Self {
        Self {
            document: JsonDocument::new(path, serialize_writes),
            authors,
        }
    }

    pub async fn list(&self) -> StoreResult<Vec<Book>> {
        self.document.read_all().await
    }

    /// Books whose `author_id` matches. An unknown author simply yields nothing.
    pub async fn list_by_author(&self, author_id: RecordId) -> StoreResult<Vec<Book>> {
        let mut books = self.list().await?;
        books.retain(|b| b.author_id == author_id);
        Ok(books)
    }

    pub async fn get(&self, id: RecordId) -> StoreResult<Book> {
        let books = self.list().await?;
        find(books, id)
    }

    /// Inserts a new book with the next free id.
    ///
    /// The author lookup runs first, so a missing author surfaces as
    /// `Author(id=..) Not Found` before any book rule is looked at. Titles are
    /// unique per author, ignoring case.
    pub async fn create(&self, input: NewBook) -> StoreResult<Book> {
        self.authors.get(input.author_id).await?;

        let _guard = self.document.lock_writes().await;
        let mut books = self.list().await?;

        let wanted = input.name.to_lowercase();
        let duplicate = books
            .iter()
            .any(|b| b.author_id == input.author_id && b.name.to_lowercase() == wanted);
        if duplicate {
            return Err(StoreError::book_exists(input.name));
        }

        let book = Book {
            id: next_id(&books),
            author_id: input.author_id,
            name: input.name,
        };
        books.push(book.clone());
        self.document.write_all(&books).await?;

        info!(book_id = book.id, author_id = book.author_id, name = %book.name, "book created");
        Ok(book)
    }

    pub async fn delete(&self, id: RecordId) -> StoreResult<()> {
        let _guard = self.document.lock_writes().await;
        let mut books = self.list().await?;

        if !books.iter().any(|b| b.id == id) {
            return Err(StoreError::not_found(Entity::Book, id));
        }
        books.retain(|b| b.id != id);
        self.document.write_all(&books).await?;

        info!(book_id = id, "book deleted");
        Ok(())
    }
}

fn find(books: Vec<Book>, id: RecordId) -> StoreResult<Book> {
    books
        .into_iter()
        .find(|b| b.id == id)
        .ok_or_else(|| StoreError::not_found(Entity::Book, id))
}
