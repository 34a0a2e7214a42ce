//! Whole-document JSON persistence shared by both stores.
//!
//! A backing document is one JSON array holding an entire collection. Every
//! read parses the full file and every write replaces it.

use crate::domain::error::{StoreError, StoreResult};
use crate::domain::model::Record;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error};

/// Guard returned by [`JsonDocument::lock_writes`].
///
/// `None` when write serialization is disabled.
pub type WriteGuard<'a> = Option<MutexGuard<'a, ()>>;

/// A typed handle to one backing document.
#[derive(Debug)]
pub struct JsonDocument<T> {
    path: PathBuf,
    serialize_writes: bool,
    /// Single-writer lock covering read -> decide -> write of a mutation.
    write_lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T: Record> JsonDocument<T> {
    pub fn new(path: impl Into<PathBuf>, serialize_writes: bool) -> Self {
        Self {
            path: path.into(),
            serialize_writes,
            write_lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Takes the writer lock if serialization is enabled.
    ///
    /// Callers hold the guard for the whole mutation. Readers never take it.
    pub async fn lock_writes(&self) -> WriteGuard<'_> {
        if self.serialize_writes {
            Some(self.write_lock.lock().await)
        } else {
            None
        }
    }

    /// Reads and parses the whole collection.
    ///
    /// A missing file or empty content is an empty collection. Anything else
    /// that is not a JSON array of records is [`StoreError::Corruption`].
    pub async fn read_all(&self) -> StoreResult<Vec<T>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path().display(), "backing document missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| {
            let entity = T::ENTITY;
            error!(
                entity = %entity,
                path = %self.path().display(),
                error = %source,
                "failed to parse backing document"
            );
            StoreError::Corruption {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Replaces the whole collection on disk.
    ///
    /// The new content goes to a temporary sibling file which is then renamed
    /// over the document, so readers see either the old or the new array.
    pub async fn write_all(&self, records: &[T]) -> StoreResult<()> {
        let body = serde_json::to_vec(records).map_err(|e| StoreError::io(&self.path, e.into()))?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || replace_file(&path, &body))
            .await
            .map_err(|e| StoreError::io(&self.path, io::Error::other(e)))?
            .map_err(|e| StoreError::io(&self.path, e))?;

        let entity = T::ENTITY;
        debug!(
            entity = %entity,
            path = %self.path().display(),
            records = records.len(),
            "backing document rewritten"
        );
        Ok(())
    }
}

fn replace_file(path: &Path, body: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(body)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Author, Book};
    use tempfile::TempDir;

    fn author(id: i64, name: &str) -> Author {
        Author {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let doc: JsonDocument<Author> = JsonDocument::new(dir.path().join("authors.json"), true);
        assert!(doc.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_content_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("authors.json");
        std::fs::write(&path, "").unwrap();
        let doc: JsonDocument<Author> = JsonDocument::new(&path, true);
        assert!(doc.read_all().await.unwrap().is_empty());

        std::fs::write(&path, "  \n").unwrap();
        assert!(doc.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn write_then_read_returns_same_records() {
        let dir = TempDir::new().unwrap();
        let doc: JsonDocument<Author> = JsonDocument::new(dir.path().join("authors.json"), true);
        let records = vec![author(1, "George Orwell"), author(2, "Aldous Huxley")];

        doc.write_all(&records).await.unwrap();
        assert_eq!(doc.read_all().await.unwrap(), records);

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(doc.path()).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!([
                {"id": 1, "name": "George Orwell"},
                {"id": 2, "name": "Aldous Huxley"}
            ])
        );
    }

    #[tokio::test]
    async fn write_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("db").join("books.json");
        let doc: JsonDocument<Book> = JsonDocument::new(&path, false);
        doc.write_all(&[Book {
            id: 1,
            author_id: 1,
            name: "1984".to_string(),
        }])
        .await
        .unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn malformed_content_is_corruption() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("authors.json");
        let doc: JsonDocument<Author> = JsonDocument::new(&path, true);

        for bad in ["{not json", r#"{"id": 1, "name": "x"}"#, "[1, 2, 3]", r#"[{"id": "one"}]"#] {
            std::fs::write(&path, bad).unwrap();
            let err = doc.read_all().await.unwrap_err();
            assert!(matches!(err, StoreError::Corruption { .. }), "{bad} -> {err:?}");
        }
    }

    #[tokio::test]
    async fn lock_is_skipped_when_serialization_disabled() {
        let dir = TempDir::new().unwrap();
        let doc: JsonDocument<Author> = JsonDocument::new(dir.path().join("a.json"), false);
        let first = doc.lock_writes().await;
        let second = doc.lock_writes().await;
        assert!(first.is_none() && second.is_none());
    }
}
