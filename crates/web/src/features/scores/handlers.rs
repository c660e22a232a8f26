use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::score::{SubmitScoreRequest, SubmittedScore},
};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    post,
    path = "/api/score",
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Score saved", body = SubmittedScore),
        (status = 400, description = "Invalid name or hits exceeds total"),
        (status = 422, description = "Malformed or missing fields")
    ),
    tag = "scores"
)]
pub async fn submit_score(
    State(db): State<Database>,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;
    req.validate()?;

    let saved = services::submit_score(&db, &req).await?;

    Ok(Json(saved).into_response())
}
