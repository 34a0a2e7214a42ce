pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{AuthorStore, BookStore};
pub use domain::error::{StoreError, StoreResult};
pub use domain::model::{Author, Book, Entity, NewAuthor, NewBook, RecordId};
pub use infra::config::Settings;
pub use transport::graphql::{build_schema, schema_from_settings, LectureSchema};
