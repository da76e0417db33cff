use dotenv::dotenv;
use std::env;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub connection_lifetime_secs: u64,
    pub app_env: String,
    /// Maximum number of rows accepted by a single bulk import
    pub max_bulk_size: usize,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in .env file".to_string())?;

        let max_connections = env::var("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let connection_lifetime_secs = env::var("DB_CONNECTION_LIFETIME_SECS")
            .unwrap_or_else(|_| "1800".to_string())
            .parse::<u64>()
            .map_err(|_| {
                "Invalid DB_CONNECTION_LIFETIME_SECS: must be a positive number".to_string()
            })?;

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let max_bulk_size = env::var("MAX_BULK_SIZE")
            .unwrap_or_else(|_| "1000".to_string())
            .parse::<usize>()
            .map_err(|_| "Invalid MAX_BULK_SIZE: must be a positive number".to_string())?;

        Ok(Config {
            database_url,
            max_connections,
            connection_lifetime_secs,
            app_env,
            max_bulk_size,
        })
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn print_info(&self) {
        info!(
            environment = %self.app_env,
            database = %Self::mask_url(&self.database_url),
            max_connections = self.max_connections,
            connection_lifetime_secs = self.connection_lifetime_secs,
            max_bulk_size = self.max_bulk_size,
            "Server configuration loaded"
        );
    }

    /// Maschera l'URL del database per il logging
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        "***".to_string()
    }
}
