use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::NewScore;

/// Request payload for submitting a score
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitScoreRequest {
    /// Display name; whitespace is collapsed and it is cut to 24 characters
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(range(min = 0, message = "Hits must be greater than or equal to 0"))]
    pub hits: i64,

    #[validate(range(min = 1, message = "Total must be greater than 0"))]
    pub total: i64,
}

/// Echo of a saved score
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmittedScore {
    pub ok: bool,
    pub name: String,
    pub hits: i64,
    pub total: i64,
    pub percent: f64,
    pub created_at: String,
}

impl From<NewScore> for SubmittedScore {
    fn from(score: NewScore) -> Self {
        Self {
            ok: true,
            name: score.name,
            hits: score.hits,
            total: score.total,
            percent: score.percent,
            created_at: score.created_at,
        }
    }
}
