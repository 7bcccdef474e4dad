use serde::Deserialize;

use crate::domain::chunking::ChunkerConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub chunking: ChunkingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Authentication settings
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret. A random one is generated when unset.
    pub jwt_secret: Option<String>,
    pub jwt_expiration_hours: u64,
}

/// Storage backend selection
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// One of "memory", "json", or "postgres"
    pub backend: String,
    /// Data directory for the json backend
    pub data_dir: String,
    /// Connection URL for the postgres backend
    pub database_url: Option<String>,
}

/// Chunk size bounds used when a request carries no overrides
#[derive(Debug, Clone, Deserialize)]
pub struct ChunkingSettings {
    pub target_length: usize,
    pub max_length: usize,
    pub min_length: usize,
}

impl ChunkingSettings {
    pub fn to_chunker_config(&self) -> ChunkerConfig {
        ChunkerConfig {
            target_length: self.target_length,
            max_length: self.max_length,
            min_length: self.min_length,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_expiration_hours: 24,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            data_dir: "data".to_string(),
            database_url: None,
        }
    }
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        let defaults = ChunkerConfig::default();
        Self {
            target_length: defaults.target_length,
            max_length: defaults.max_length,
            min_length: defaults.min_length,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("TYPETUTOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
