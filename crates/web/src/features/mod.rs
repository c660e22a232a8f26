use axum::Router;
use storage::Database;

pub mod debug;
pub mod health;
pub mod ranking;
pub mod scores;

pub fn routes() -> Router<Database> {
    let api = Router::new()
        .merge(scores::routes::routes())
        .merge(ranking::routes::routes());

    Router::new()
        .merge(health::routes())
        .nest("/api", api)
        .nest("/debug", debug::routes::routes())
}
