use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Operational snapshot of the backing file.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DatabaseSnapshot {
    /// Absolute path of the database file
    pub db_path: String,
    /// File size in bytes, 0 when the file is absent
    pub size_bytes: u64,
    pub has_scores_table: bool,
    /// Row count, 0 when the table is absent
    pub rows: i64,
}
