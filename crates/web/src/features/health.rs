use axum::{Json, Router, routing::get};
use storage::{Database, dto::common::StatusResponse};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = StatusResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}

pub fn routes() -> Router<Database> {
    Router::new().route("/health", get(health))
}
