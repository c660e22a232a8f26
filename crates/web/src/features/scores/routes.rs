use axum::{Router, routing::post};
use storage::Database;

use super::handlers::submit_score;

pub fn routes() -> Router<Database> {
    Router::new().route("/score", post(submit_score))
}
