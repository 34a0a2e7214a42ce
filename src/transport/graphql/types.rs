//! GraphQL object, input, and result types.

use crate::app::{AuthorStore, BookStore};
use crate::domain::error::StoreError;
use crate::domain::model::{Author, Book, RecordId};
use crate::domain::validation::{FieldError, ValidationErrors};
use async_graphql::{Context, InputObject, Json, Object, SimpleObject, Union};
use std::sync::Arc;
use tracing::error;

/// Converts a store failure that has no typed result into a GraphQL error.
///
/// Corruption and I/O failures are logged here; they reach the client only as
/// a generic field error.
pub(crate) fn field_error(err: StoreError) -> async_graphql::Error {
    if !err.is_domain_signal() {
        error!(error = %err, "store operation failed");
    }
    async_graphql::Error::new(err.to_string())
}

#[derive(Debug, Clone)]
pub struct AuthorType(pub Author);

impl From<Author> for AuthorType {
    fn from(author: Author) -> Self {
        Self(author)
    }
}

#[Object(name = "Author", rename_fields = "snake_case", rename_args = "snake_case")]
impl AuthorType {
    async fn id(&self) -> RecordId {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Books currently referencing this author, read fresh on every query.
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<BookType>> {
        let books = ctx.data::<Arc<BookStore>>()?;
        let found = books.list_by_author(self.0.id).await.map_err(field_error)?;
        Ok(found.into_iter().map(BookType::from).collect())
    }
}

#[derive(Debug, Clone)]
pub struct BookType(pub Book);

impl From<Book> for BookType {
    fn from(book: Book) -> Self {
        Self(book)
    }
}

#[Object(name = "Book", rename_fields = "snake_case", rename_args = "snake_case")]
impl BookType {
    async fn id(&self) -> RecordId {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn author_id(&self) -> RecordId {
        self.0.author_id
    }

    /// The referenced author. Errors if the author was deleted after the book was created.
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<AuthorType> {
        let authors = ctx.data::<Arc<AuthorStore>>()?;
        let author = authors.get(self.0.author_id).await.map_err(field_error)?;
        Ok(author.into())
    }
}

#[derive(InputObject, Debug)]
#[graphql(name = "AuthorAdd")]
pub struct AuthorAddInput {
    pub name: String,
}

#[derive(InputObject, Debug)]
#[graphql(name = "BookAddInput", rename_fields = "snake_case")]
pub struct BookAddInput {
    pub author_id: RecordId,
    pub name: String,
}

#[derive(SimpleObject, Debug)]
#[graphql(name = "AuthorNotFound")]
pub struct AuthorNotFound {
    pub message: String,
}

#[derive(SimpleObject, Debug)]
#[graphql(name = "AuthorAlreadyExist")]
pub struct AuthorAlreadyExist {
    pub message: String,
}

#[derive(SimpleObject, Debug)]
#[graphql(name = "BookNotFound")]
pub struct BookNotFound {
    pub message: String,
}

#[derive(SimpleObject, Debug)]
#[graphql(name = "BookAlreadyExist")]
pub struct BookAlreadyExist {
    pub message: String,
}

#[derive(SimpleObject, Debug)]
#[graphql(name = "ValidationErrorSchema")]
pub struct ValidationErrorSchema {
    pub location: Vec<String>,
    pub message: String,
    #[graphql(name = "type")]
    pub kind: String,
    pub ctx: Option<Json<serde_json::Value>>,
}

#[derive(SimpleObject, Debug)]
#[graphql(name = "ValidationError")]
pub struct ValidationErrorResponse {
    pub message: String,
    pub errors: Vec<ValidationErrorSchema>,
}

impl From<FieldError> for ValidationErrorSchema {
    fn from(err: FieldError) -> Self {
        Self {
            location: err.location,
            message: err.message,
            kind: err.kind,
            ctx: err.ctx.map(Json),
        }
    }
}

impl From<ValidationErrors> for ValidationErrorResponse {
    fn from(errs: ValidationErrors) -> Self {
        Self {
            message: errs.to_string(),
            errors: errs.errors.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Union, Debug)]
pub enum AuthorGetResponse {
    Author(AuthorType),
    NotFound(AuthorNotFound),
}

#[derive(Union, Debug)]
pub enum AuthorAddResponse {
    Author(AuthorType),
    Invalid(ValidationErrorResponse),
    AlreadyExist(AuthorAlreadyExist),
}

#[derive(Union, Debug)]
pub enum BookGetResponse {
    Book(BookType),
    NotFound(BookNotFound),
}

/// Note the author variant: a missing author is reported with the author's type.
#[derive(Union, Debug)]
pub enum BookAddResponse {
    Book(BookType),
    Invalid(ValidationErrorResponse),
    AuthorNotFound(AuthorNotFound),
    AlreadyExist(BookAlreadyExist),
}
