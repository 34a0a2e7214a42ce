use crate::transport::http::handlers::{graphql, health};
use crate::transport::http::types::{ApiResponse, AppState, GraphQLRequest};
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        graphql::graphql_handler,
        graphql::graphiql_handler
    ),
    components(schemas(GraphQLRequest, ApiResponse))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health-check", get(health::healthcheck_handler))
        .route(
            "/graphql",
            get(graphql::graphiql_handler).post(graphql::graphql_handler),
        )
        .with_state(app_state)
}

/// The router plus Swagger UI, permissive CORS, and request tracing.
pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
