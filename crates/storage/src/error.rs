use thiserror::Error;

/// SQLite primary result code for `SQLITE_CORRUPT`.
const SQLITE_CORRUPT: i32 = 11;
/// SQLite primary result code for `SQLITE_NOTADB`.
const SQLITE_NOTADB: i32 = 26;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store corrupted: {0}")]
    Corrupted(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// True when the backing file exists but is not a usable SQLite store.
    pub fn is_corruption(&self) -> bool {
        match self {
            StorageError::Corrupted(_) => true,
            StorageError::Database(sqlx::Error::Database(e)) => e
                .code()
                .and_then(|code| code.parse::<i32>().ok())
                .is_some_and(|code| matches!(code & 0xff, SQLITE_CORRUPT | SQLITE_NOTADB)),
            _ => false,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, StorageError::InvalidInput(_))
    }
}
