use sqlx::SqliteConnection;

use crate::error::Result;
use crate::models::NewScore;

pub struct ScoreRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> ScoreRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a score and return the id assigned by the store
    pub async fn insert(&mut self, score: &NewScore) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO scores (name, hits, total, percent, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&score.name)
        .bind(score.hits)
        .bind(score.total)
        .bind(score.percent)
        .bind(&score.created_at)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn count(&mut self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM scores")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }
}
