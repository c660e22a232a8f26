use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::debug::DatabaseSnapshot};

use crate::error::WebResult;

#[utoipa::path(
    get,
    path = "/debug/db",
    responses(
        (status = 200, description = "Database file snapshot", body = DatabaseSnapshot)
    ),
    tag = "debug"
)]
pub async fn debug_db(State(db): State<Database>) -> WebResult<Response> {
    let snapshot = db.snapshot().await?;

    Ok(Json(snapshot).into_response())
}
