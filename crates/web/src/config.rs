use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::middleware::cors::DEFAULT_ORIGINS;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub cors_origins: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match var("PORT") {
            Some(port) => port.parse().context("PORT must be a number")?,
            None => 5173,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database_path: var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("ranking.db")),
            cors_origins: var("CORS_ORIGINS").unwrap_or_else(|| DEFAULT_ORIGINS.to_string()),
        })
    }
}
