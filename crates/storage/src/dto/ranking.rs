use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::ScoreRecord;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 50;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RankingFilter {
    /// Number of entries to return, clamped to 1..=50 (default 10)
    pub limit: Option<i64>,
}

impl RankingFilter {
    pub fn new(limit: Option<i64>) -> Self {
        Self { limit }
    }

    /// Requested limit clamped into `[MIN_LIMIT, MAX_LIMIT]`.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(MIN_LIMIT, MAX_LIMIT)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RankingEntry {
    pub name: String,
    pub hits: i64,
    pub total: i64,
    pub percent: f64,
    pub created_at: String,
}

impl From<ScoreRecord> for RankingEntry {
    fn from(record: ScoreRecord) -> Self {
        Self {
            name: record.name,
            hits: record.hits,
            total: record.total,
            percent: record.percent,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(RankingFilter::default().limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(RankingFilter::new(Some(0)).limit(), 1);
        assert_eq!(RankingFilter::new(Some(-20)).limit(), 1);
        assert_eq!(RankingFilter::new(Some(1)).limit(), 1);
        assert_eq!(RankingFilter::new(Some(25)).limit(), 25);
        assert_eq!(RankingFilter::new(Some(50)).limit(), 50);
        assert_eq!(RankingFilter::new(Some(51)).limit(), 50);
        assert_eq!(RankingFilter::new(Some(i64::MAX)).limit(), 50);
    }
}
