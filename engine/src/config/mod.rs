mod config_content_provider;
mod config_manager;
mod config_serializer;
mod game_config;

use std::path::PathBuf;
use thiserror::Error;

pub use config_content_provider::{
    ConfigContentProvider, FileContentConfigProvider, InMemoryConfigProvider,
};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use game_config::{GameConfig, MAX_DELAY_MS};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Failed to deserialize config: {0}")]
    Deserialize(String),

    #[error("Config validation error: {0}")]
    Validation(String),
}
