//! Cooperated server library - espone i moduli principali per il binario e per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use self::core::{AppError, AppState, Config};
pub use services::{CooperatedService, SessionService};

use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use std::time::Duration;
use tracing::info;

/// Apre il pool di connessioni MySQL e applica le migrations in `migrations/`
pub async fn connect(config: &Config) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database connected and migrations applied");

    Ok(pool)
}
