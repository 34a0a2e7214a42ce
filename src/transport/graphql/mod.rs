//! GraphQL schema over the author and book stores.
//!
//! Both stores are attached to the schema as shared data; resolvers (including
//! the `Author.books` / `Book.author` relations) borrow them from the context
//! instead of building their own.

pub mod authors;
pub mod books;
pub mod depth;
pub mod types;

use crate::app::{AuthorStore, BookStore};
use crate::infra::config::Settings;
use async_graphql::{EmptySubscription, MergedObject, Request, Response, Schema};
use std::sync::Arc;

pub use authors::{AuthorsMutation, AuthorsQuery};
pub use books::{BooksMutation, BooksQuery};

#[derive(MergedObject, Default)]
#[graphql(name = "Query")]
pub struct QueryRoot(AuthorsQuery, BooksQuery);

#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct MutationRoot(AuthorsMutation, BooksMutation);

/// The executable schema plus the selection depth limit applied before execution.
#[derive(Clone)]
pub struct LectureSchema {
    inner: Schema<QueryRoot, MutationRoot, EmptySubscription>,
    query_depth_limit: usize,
}

impl LectureSchema {
    pub async fn execute(&self, request: impl Into<Request>) -> Response {
        let request = request.into();
        if let Err(err) = depth::check_depth(&request.query, self.query_depth_limit) {
            return Response::from_errors(vec![err]);
        }
        self.inner.execute(request).await
    }

    pub fn sdl(&self) -> String {
        self.inner.sdl()
    }
}

pub fn build_schema(
    authors: Arc<AuthorStore>,
    books: Arc<BookStore>,
    query_depth_limit: usize,
) -> LectureSchema {
    let inner = Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(authors)
        .data(books)
        .finish();
    LectureSchema {
        inner,
        query_depth_limit,
    }
}

/// Opens both stores from `settings` and builds the schema around them.
pub fn schema_from_settings(settings: &Settings) -> LectureSchema {
    let authors = Arc::new(AuthorStore::new(settings));
    let books = Arc::new(BookStore::new(settings, Arc::clone(&authors)));
    build_schema(authors, books, settings.query_depth_limit)
}
