use anyhow::Context;
use storage::Database;

mod app;
mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::cors::AllowedOrigins;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting score ranking API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::initialize(&config.database_path)
        .await
        .context("Failed to initialize database")?;
    match db.recovered_from() {
        Some(quarantined) => tracing::warn!(
            "Database recovered; corrupted file kept at {}",
            quarantined.display()
        ),
        None => tracing::info!("Database ready"),
    }

    let origins = AllowedOrigins::from_comma_separated(&config.cors_origins);
    if origins.is_empty() {
        tracing::warn!("No CORS origins configured; browser clients will be rejected");
    } else {
        tracing::info!("CORS enabled for {} origin(s)", origins.len());
    }

    let app = app::build_router(db, &origins);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    tracing::info!("Starting server at http://{}", bind_address);

    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
