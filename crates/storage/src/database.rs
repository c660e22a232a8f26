use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};

use crate::dto::debug::DatabaseSnapshot;
use crate::error::{Result, StorageError};
use crate::recovery;
use crate::repository::score::ScoreRepository;
use crate::schema;

/// Future returned by an operation passed to [`Database::with_connection`].
pub type BoxFuture<'c, T> = Pin<Box<dyn Future<Output = T> + Send + 'c>>;

/// Owner of the score database file.
///
/// No connection is held between operations: each call to
/// [`Database::with_connection`] opens one and closes it before returning.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    options: SqliteConnectOptions,
    recovered_from: Option<PathBuf>,
}

impl Database {
    /// Open the database at `path`, creating the schema if needed.
    ///
    /// A file that is not a valid SQLite store is quarantined next to the
    /// original and replaced by a fresh one. Only a failed rebuild, or an
    /// open failure unrelated to corruption, is returned as an error.
    pub async fn initialize(path: impl AsRef<Path>) -> Result<Self> {
        let path = std::path::absolute(path.as_ref())?;
        tracing::info!(path = %path.display(), "Using score database");

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);

        let mut db = Self {
            path,
            options,
            recovered_from: None,
        };
        db.recovered_from = recovery::bootstrap(&db).await?;

        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the corrupted file was moved during startup, if recovery ran.
    pub fn recovered_from(&self) -> Option<&Path> {
        self.recovered_from.as_deref()
    }

    /// Run one logical operation on a fresh connection.
    ///
    /// The connection is closed before the operation's result is returned,
    /// whether it succeeded or failed.
    ///
    /// ```no_run
    /// # async fn run(db: storage::Database) -> storage::error::Result<()> {
    /// use storage::repository::score::ScoreRepository;
    ///
    /// let rows = db
    ///     .with_connection(|conn| Box::pin(async move { ScoreRepository::new(conn).count().await }))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn with_connection<T, F>(&self, op: F) -> Result<T>
    where
        F: for<'c> FnOnce(&'c mut SqliteConnection) -> BoxFuture<'c, Result<T>> + Send,
    {
        let mut conn = self.connection().await?;
        let outcome = op(&mut conn).await;
        self.release(conn).await;
        outcome
    }

    async fn connection(&self) -> Result<SqliteConnection> {
        let conn = SqliteConnection::connect_with(&self.options).await?;
        Ok(conn)
    }

    /// Close failures are logged, never returned.
    async fn release(&self, conn: SqliteConnection) {
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "Failed to close database connection");
        }
    }

    /// Create the schema if absent and verify the file's integrity.
    pub(crate) async fn ensure_schema(&self) -> Result<()> {
        self.with_connection(|conn| Box::pin(create_and_check(conn)))
            .await
    }

    /// File size, table presence and row count, for operational visibility.
    pub async fn snapshot(&self) -> Result<DatabaseSnapshot> {
        let size_bytes = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(e) => return Err(e.into()),
        };

        let (has_scores_table, rows) = self
            .with_connection(|conn| Box::pin(table_stats(conn)))
            .await?;

        Ok(DatabaseSnapshot {
            db_path: self.path.display().to_string(),
            size_bytes,
            has_scores_table,
            rows,
        })
    }
}

async fn create_and_check(conn: &mut SqliteConnection) -> Result<()> {
    for stmt in schema::all_schema_statements() {
        sqlx::query(stmt).execute(&mut *conn).await?;
    }

    let verdict: String = sqlx::query_scalar("PRAGMA quick_check")
        .fetch_one(&mut *conn)
        .await?;
    if verdict != "ok" {
        return Err(StorageError::Corrupted(verdict));
    }

    Ok(())
}

async fn table_stats(conn: &mut SqliteConnection) -> Result<(bool, i64)> {
    let has_table = sqlx::query("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1")
        .bind(schema::SCORES_TABLE)
        .fetch_optional(&mut *conn)
        .await?
        .is_some();

    if !has_table {
        return Ok((false, 0));
    }

    let rows = ScoreRepository::new(conn).count().await?;

    Ok((true, rows))
}
