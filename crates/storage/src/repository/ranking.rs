use sqlx::SqliteConnection;

use crate::dto::ranking::RankingEntry;
use crate::error::Result;
use crate::models::ScoreRecord;

pub struct RankingRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> RankingRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Top scores: percent desc, then hits desc, then earliest submission.
    /// `id` breaks any remaining tie by insertion order.
    pub async fn top(&mut self, limit: i64) -> Result<Vec<RankingEntry>> {
        let rows = sqlx::query_as::<_, ScoreRecord>(
            r#"
            SELECT id, name, hits, total, percent, created_at
            FROM scores
            ORDER BY percent DESC, hits DESC, created_at ASC, id ASC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows.into_iter().map(RankingEntry::from).collect())
    }
}
