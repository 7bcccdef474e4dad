//! Application configuration loading

mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, ChunkingSettings, LogFormat, LoggingConfig, ServerConfig,
    StorageSettings,
};
