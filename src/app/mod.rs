pub mod author_store;
pub mod book_store;

pub use author_store::AuthorStore;
pub use book_store::BookStore;
