//! Startup self-healing for the score database.
//!
//! `Opening → {Ready | Corrupted → Quarantining → Recreating → Ready | Failed}`.
//! Only `Failed` aborts startup.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::database::Database;
use crate::error::{Result, StorageError};

/// Side files SQLite may leave next to the main file.
const SIDE_FILE_SUFFIXES: &[&str] = &["-wal", "-shm", "-journal"];

#[derive(Debug)]
enum InitState {
    Opening,
    Corrupted(StorageError),
    Quarantining,
    Recreating { quarantined: Option<PathBuf> },
    Ready { quarantined: Option<PathBuf> },
    Failed(String),
}

/// Drive the startup state machine to a terminal state.
///
/// Returns the quarantine path when the original file had to be replaced.
pub(crate) async fn bootstrap(db: &Database) -> Result<Option<PathBuf>> {
    let mut state = InitState::Opening;

    loop {
        state = match state {
            InitState::Opening => match db.ensure_schema().await {
                Ok(()) => InitState::Ready { quarantined: None },
                Err(e) if e.is_corruption() => InitState::Corrupted(e),
                Err(e) => InitState::Failed(format!("cannot open database: {e}")),
            },
            InitState::Corrupted(e) => {
                tracing::warn!(
                    path = %db.path().display(),
                    error = %e,
                    "Database file is corrupted"
                );
                InitState::Quarantining
            }
            InitState::Quarantining => match quarantine(db.path()) {
                Ok(quarantined) => {
                    remove_side_files(db.path());
                    InitState::Recreating { quarantined }
                }
                Err(e) => InitState::Failed(format!("cannot quarantine database: {e}")),
            },
            InitState::Recreating { quarantined } => match db.ensure_schema().await {
                Ok(()) => {
                    tracing::info!(path = %db.path().display(), "Created fresh database");
                    InitState::Ready { quarantined }
                }
                Err(e) => InitState::Failed(format!("cannot recreate database: {e}")),
            },
            InitState::Ready { quarantined } => return Ok(quarantined),
            InitState::Failed(reason) => {
                tracing::error!(path = %db.path().display(), "{}", reason);
                return Err(StorageError::Unavailable(reason));
            }
        };
    }
}

/// Move the file at `path` aside. Returns `None` when there was nothing to move.
fn quarantine(path: &Path) -> std::io::Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    let target = quarantine_path(path);
    std::fs::rename(path, &target)?;
    tracing::warn!(quarantined = %target.display(), "Moved corrupted database aside");

    Ok(Some(target))
}

/// `<file>.bad.<timestamp>` next to `path`, suffixed with `-N` if taken.
pub(crate) fn quarantine_path(path: &Path) -> PathBuf {
    let timestamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
    let base_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("ranking.db");

    let candidate = path.with_file_name(format!("{base_name}.bad.{timestamp}"));
    if !candidate.exists() {
        return candidate;
    }

    (1..)
        .map(|n| path.with_file_name(format!("{base_name}.bad.{timestamp}-{n}")))
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

fn remove_side_files(path: &Path) {
    for suffix in SIDE_FILE_SUFFIXES {
        let mut side = path.as_os_str().to_os_string();
        side.push(suffix);
        let side = PathBuf::from(side);

        match std::fs::remove_file(&side) {
            Ok(()) => tracing::info!(file = %side.display(), "Removed stale side file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                file = %side.display(),
                error = %e,
                "Failed to remove side file; continuing"
            ),
        }
    }
}
