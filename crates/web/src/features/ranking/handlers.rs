use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::ranking::{RankingEntry, RankingFilter},
};

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/ranking",
    params(RankingFilter),
    responses(
        (status = 200, description = "Ranking retrieved successfully", body = Vec<RankingEntry>),
        (status = 422, description = "Invalid query parameters")
    ),
    tag = "ranking"
)]
pub async fn get_ranking(
    State(db): State<Database>,
    query: Result<Query<RankingFilter>, QueryRejection>,
) -> WebResult<Response> {
    let Query(filter) = query?;

    let entries = services::get_ranking(&db, &filter).await?;

    Ok(Json(entries).into_response())
}
