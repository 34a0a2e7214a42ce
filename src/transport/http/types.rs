use crate::infra::config::Settings;
use crate::transport::graphql::{schema_from_settings, LectureSchema};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub schema: LectureSchema,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            schema: schema_from_settings(settings),
        }
    }
}

/// Body of a GraphQL HTTP request.
#[derive(Deserialize, Debug, ToSchema)]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub variables: Option<JsonValue>,
    #[serde(default, rename = "operationName")]
    pub operation_name: Option<String>,
}

impl From<GraphQLRequest> for async_graphql::Request {
    fn from(body: GraphQLRequest) -> Self {
        let mut request = async_graphql::Request::new(body.query);
        if let Some(variables) = body.variables {
            request = request.variables(async_graphql::Variables::from_json(variables));
        }
        if let Some(operation_name) = body.operation_name {
            request = request.operation_name(operation_name);
        }
        request
    }
}

/// Error envelope for requests rejected before reaching GraphQL.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse {
            success: false,
            error: Some(format!("Invalid JSON body: {} (expected: {})", err, expected)),
        }),
    )
}
