use crate::transport::http::types::{json_422, ApiResponse, AppState, GraphQLRequest};
use async_graphql::http::GraphiQLSource;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::Json;
use tracing::debug;

#[utoipa::path(
    post,
    path = "/graphql",
    request_body = GraphQLRequest,
    responses(
        (status = 200, description = "GraphQL response (`data` and/or `errors`)"),
        (status = 422, description = "Body is not a GraphQL request", body = ApiResponse)
    )
)]
pub async fn graphql_handler(
    State(state): State<AppState>,
    payload: Result<Json<GraphQLRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(err) => return json_422(err, "{ query, variables?, operationName? }").into_response(),
    };

    debug!(
        operation = body.operation_name.as_deref().unwrap_or("<anonymous>"),
        "executing GraphQL request"
    );
    let response = state.schema.execute(async_graphql::Request::from(body)).await;
    Json(response).into_response()
}

#[utoipa::path(
    get,
    path = "/graphql",
    responses(
        (status = 200, description = "GraphiQL IDE", body = String, content_type = "text/html")
    )
)]
pub async fn graphiql_handler() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
