//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Seed catalog configuration
    pub catalog: CatalogConfig,
    /// Listing client configuration
    pub source: SourceConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Seed catalog configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// JSON file holding the worker list served by `/api/workers`
    pub data_file: String,
}

/// Listing client configuration
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Endpoint the directory fetches workers from
    pub workers_url: String,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            catalog: CatalogConfig {
                data_file: env::var("WORKERS_FILE")
                    .unwrap_or_else(|_| "data/workers.json".to_string()),
            },
            source: SourceConfig {
                workers_url: env::var("WORKERS_API_URL")
                    .unwrap_or_else(|_| "http://127.0.0.1:8080/api/workers".to_string()),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
