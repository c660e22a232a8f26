use axum::{Router, routing::get};
use storage::Database;

use super::handlers::debug_db;

pub fn routes() -> Router<Database> {
    Router::new().route("/db", get(debug_db))
}
