use crate::app::BookStore;
use crate::domain::error::StoreError;
use crate::domain::model::{Entity, RecordId};
use crate::domain::validation::validate_new_book;
use crate::transport::graphql::types::{
    field_error, AuthorNotFound, BookAddInput, BookAddResponse, BookAlreadyExist,
    BookGetResponse, BookNotFound, BookType,
};
use async_graphql::{Context, Object};
use std::sync::Arc;

#[derive(Default)]
pub struct BooksQuery;

#[Object(rename_fields = "snake_case", rename_args = "snake_case")]
impl BooksQuery {
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<BookType>> {
        let store = ctx.data::<Arc<BookStore>>()?;
        let books = store.list().await.map_err(field_error)?;
        Ok(books.into_iter().map(BookType::from).collect())
    }

    async fn book(
        &self,
        ctx: &Context<'_>,
        book_id: RecordId,
    ) -> async_graphql::Result<BookGetResponse> {
        let store = ctx.data::<Arc<BookStore>>()?;
        match store.get(book_id).await {
            Ok(book) => Ok(BookGetResponse::Book(book.into())),
            Err(err @ StoreError::NotFound { .. }) => Ok(BookGetResponse::NotFound(BookNotFound {
                message: err.to_string(),
            })),
            Err(err) => Err(field_error(err)),
        }
    }
}

#[derive(Default)]
pub struct BooksMutation;

#[Object(rename_fields = "snake_case", rename_args = "snake_case")]
impl BooksMutation {
    async fn create_book(
        &self,
        ctx: &Context<'_>,
        input: BookAddInput,
    ) -> async_graphql::Result<BookAddResponse> {
        let new_book = match validate_new_book(input.author_id, &input.name) {
            Ok(new_book) => new_book,
            Err(errs) => return Ok(BookAddResponse::Invalid(errs.into())),
        };

        let store = ctx.data::<Arc<BookStore>>()?;
        match store.create(new_book).await {
            Ok(book) => Ok(BookAddResponse::Book(book.into())),
            Err(
                err @ StoreError::NotFound {
                    entity: Entity::Author,
                    ..
                },
            ) => Ok(BookAddResponse::AuthorNotFound(AuthorNotFound {
                message: err.to_string(),
            })),
            Err(err @ StoreError::AlreadyExists { .. }) => {
                Ok(BookAddResponse::AlreadyExist(BookAlreadyExist {
                    message: err.to_string(),
                }))
            }
            Err(err) => Err(field_error(err)),
        }
    }

    /// Returns `null` on success.
    async fn delete_book(
        &self,
        ctx: &Context<'_>,
        book_id: RecordId,
    ) -> async_graphql::Result<Option<BookNotFound>> {
        let store = ctx.data::<Arc<BookStore>>()?;
        match store.delete(book_id).await {
            Ok(()) => Ok(None),
            Err(err @ StoreError::NotFound { .. }) => Ok(Some(BookNotFound {
                message: err.to_string(),
            })),
            Err(err) => Err(field_error(err)),
        }
    }
}
