//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default health banner returned by `GET /`
pub const DEFAULT_BANNER: &str = "lab 15 API service successfully";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// YAML or JSON file with the initial students and courses.
    /// The built-in dataset is used when unset.
    pub seed_path: Option<PathBuf>,

    /// Message returned by the health endpoint
    pub banner: String,

    /// Allow cross-origin requests from any origin
    pub enable_cors: bool,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            seed_path: None,
            banner: DEFAULT_BANNER.to_string(),
            enable_cors: false,
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::load_from("config/server")
    }

    /// Load configuration from `path` (extension optional) and `CAMPUS_*`
    /// environment variables, falling back to defaults for missing keys
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("CAMPUS"))
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default `EnvFilter` directives derived from `log_level`
    pub fn default_filter(&self) -> String {
        format!(
            "campus_server={level},campus_repository={level},tower_http=debug",
            level = self.log_level
        )
    }
}
