use chrono::Utc;
use storage::{
    Database,
    dto::score::{SubmitScoreRequest, SubmittedScore},
    error::Result,
    models::ScoreSubmission,
    repository::score::ScoreRepository,
};

/// Validate, normalize and persist a submission
pub async fn submit_score(db: &Database, request: &SubmitScoreRequest) -> Result<SubmittedScore> {
    let submission = ScoreSubmission::new(&request.name, request.hits, request.total)?;
    let score = submission.into_new_score(Utc::now());

    let row = score.clone();
    db.with_connection(|conn| Box::pin(async move { ScoreRepository::new(conn).insert(&row).await }))
        .await?;

    tracing::info!(
        "Saved score: {} {}/{} ({}%) @ {}",
        score.name,
        score.hits,
        score.total,
        score.percent,
        score.created_at
    );

    Ok(SubmittedScore::from(score))
}
