use storage::{
    Database,
    dto::ranking::{RankingEntry, RankingFilter},
    error::Result,
    repository::ranking::RankingRepository,
};

/// Top scores for the filter's clamped limit
pub async fn get_ranking(db: &Database, filter: &RankingFilter) -> Result<Vec<RankingEntry>> {
    let limit = filter.limit();

    db.with_connection(|conn| Box::pin(async move { RankingRepository::new(conn).top(limit).await }))
        .await
}
