use crate::app::AuthorStore;
use crate::domain::error::StoreError;
use crate::domain::model::RecordId;
use crate::domain::validation::validate_new_author;
use crate::transport::graphql::types::{
    field_error, AuthorAddInput, AuthorAddResponse, AuthorAlreadyExist, AuthorGetResponse,
    AuthorNotFound, AuthorType,
};
use async_graphql::{Context, Object};
use std::sync::Arc;

#[derive(Default)]
pub struct AuthorsQuery;

#[Object(rename_fields = "snake_case", rename_args = "snake_case")]
impl AuthorsQuery {
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<AuthorType>> {
        let store = ctx.data::<Arc<AuthorStore>>()?;
        let authors = store.list().await.map_err(field_error)?;
        Ok(authors.into_iter().map(AuthorType::from).collect())
    }

    async fn author(
        &self,
        ctx: &Context<'_>,
        author_id: RecordId,
    ) -> async_graphql::Result<AuthorGetResponse> {
        let store = ctx.data::<Arc<AuthorStore>>()?;
        match store.get(author_id).await {
            Ok(author) => Ok(AuthorGetResponse::Author(author.into())),
            Err(err @ StoreError::NotFound { .. }) => {
                Ok(AuthorGetResponse::NotFound(AuthorNotFound {
                    message: err.to_string(),
                }))
            }
            Err(err) => Err(field_error(err)),
        }
    }
}

#[derive(Default)]
pub struct AuthorsMutation;

#[Object(rename_fields = "snake_case", rename_args = "snake_case")]
impl AuthorsMutation {
    async fn create_author(
        &self,
        ctx: &Context<'_>,
        input: AuthorAddInput,
    ) -> async_graphql::Result<AuthorAddResponse> {
        let new_author = match validate_new_author(&input.name) {
            Ok(new_author) => new_author,
            Err(errs) => return Ok(AuthorAddResponse::Invalid(errs.into())),
        };

        let store = ctx.data::<Arc<AuthorStore>>()?;
        match store.create(new_author).await {
            Ok(author) => Ok(AuthorAddResponse::Author(author.into())),
            Err(err @ StoreError::AlreadyExists { .. }) => {
                Ok(AuthorAddResponse::AlreadyExist(AuthorAlreadyExist {
                    message: err.to_string(),
                }))
            }
            Err(err) => Err(field_error(err)),
        }
    }

    /// Returns `null` on success.
    async fn delete_author(
        &self,
        ctx: &Context<'_>,
        author_id: RecordId,
    ) -> async_graphql::Result<Option<AuthorNotFound>> {
        let store = ctx.data::<Arc<AuthorStore>>()?;
        match store.delete(author_id).await {
            Ok(()) => Ok(None),
            Err(err @ StoreError::NotFound { .. }) => Ok(Some(AuthorNotFound {
                message: err.to_string(),
            })),
            Err(err) => Err(field_error(err)),
        }
    }
}
