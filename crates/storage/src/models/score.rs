use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::error::{Result, StorageError};
use crate::models::PlayerName;
use crate::services::compute_percent;

/// A persisted score row. Rows are append-only and never updated.
#[derive(Debug, Clone, FromRow)]
pub struct ScoreRecord {
    pub id: i64,
    pub name: String,
    pub hits: i64,
    pub total: i64,
    pub percent: f64,
    pub created_at: String,
}

/// A score ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewScore {
    pub name: String,
    pub hits: i64,
    pub total: i64,
    pub percent: f64,
    pub created_at: String,
}

/// A validated submission: normalized name, consistent tally and its percent.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSubmission {
    name: PlayerName,
    hits: i64,
    total: i64,
    percent: f64,
}

impl ScoreSubmission {
    /// Validates a raw submission. Bounds are checked first, then the
    /// normalized name, then `hits <= total`.
    pub fn new(raw_name: &str, hits: i64, total: i64) -> Result<Self> {
        if hits < 0 {
            return Err(StorageError::InvalidInput(
                "hits must be greater than or equal to 0".to_string(),
            ));
        }
        if total <= 0 {
            return Err(StorageError::InvalidInput(
                "total must be greater than 0".to_string(),
            ));
        }

        let name = PlayerName::new(raw_name)?;

        if hits > total {
            return Err(StorageError::InvalidInput(
                "hits exceeds total".to_string(),
            ));
        }

        Ok(Self {
            name,
            hits,
            total,
            percent: compute_percent(hits, total),
        })
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn hits(&self) -> i64 {
        self.hits
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Stamps the submission with its insertion time.
    pub fn into_new_score(self, now: DateTime<Utc>) -> NewScore {
        NewScore {
            name: self.name.into_inner(),
            hits: self.hits,
            total: self.total,
            percent: self.percent,
            created_at: format_created_at(now),
        }
    }
}

/// ISO-8601 UTC with fixed microsecond precision and a literal `Z`, so text
/// order equals time order.
pub fn format_created_at(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_submission_normalizes_and_computes_percent() {
        let submission = ScoreSubmission::new("  Ana   Lima ", 7, 10).unwrap();
        assert_eq!(submission.name().as_str(), "Ana Lima");
        assert_eq!(submission.hits(), 7);
        assert_eq!(submission.total(), 10);
        assert_eq!(submission.percent(), 70.0);
    }

    #[test]
    fn test_hits_exceeding_total_is_rejected() {
        let err = ScoreSubmission::new("Ana", 11, 10).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Invalid input: hits exceeds total");
    }

    #[test]
    fn test_name_is_checked_before_tally() {
        let err = ScoreSubmission::new("   ", 11, 10).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: invalid name");
    }

    #[test]
    fn test_bounds_are_checked_first() {
        let err = ScoreSubmission::new("   ", -1, 10).unwrap_err();
        assert!(err.to_string().contains("hits must be"));

        let err = ScoreSubmission::new("   ", 0, 0).unwrap_err();
        assert!(err.to_string().contains("total must be"));
    }

    #[test]
    fn test_zero_hits_is_valid() {
        let submission = ScoreSubmission::new("Zero", 0, 3).unwrap();
        assert_eq!(submission.percent(), 0.0);
    }

    #[test]
    fn test_created_at_format() {
        let at = Utc.with_ymd_and_hms(2025, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(format_created_at(at), "2025-03-09T14:05:07.000000Z");

        let at = at + chrono::Duration::microseconds(42);
        assert_eq!(format_created_at(at), "2025-03-09T14:05:07.000042Z");
    }

    #[test]
    fn test_into_new_score_carries_fields() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let score = ScoreSubmission::new("Bia", 1, 3).unwrap().into_new_score(at);

        assert_eq!(
            score,
            NewScore {
                name: "Bia".to_string(),
                hits: 1,
                total: 3,
                percent: 33.3,
                created_at: "2025-01-01T00:00:00.000000Z".to_string(),
            }
        );
    }
}
