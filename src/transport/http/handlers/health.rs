use axum::Json;

#[utoipa::path(
    get,
    path = "/health-check",
    responses(
        (status = 200, description = "Service is up", body = bool)
    )
)]
pub async fn healthcheck_handler() -> Json<bool> {
    Json(true)
}
