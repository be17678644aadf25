//! Configuration management for edittools
//!
//! Supports loading configuration from:
//! - TOML/YAML/JSON files (`config/default.*` plus an optional explicit file)
//! - Environment variables (EDITTOOLS_ prefix, `__` separator)
//!
//! Every analysis operation takes its settings explicitly from
//! [`AnalysisConfig`]; nothing is read from ambient state.

pub mod analysis;
pub mod constants;
pub mod settings;

pub use analysis::{
    AnalysisConfig, CommentsConfig, PhraseConfig, ProperNounConfig, SingularUsageConfig,
    StandardComment,
};
pub use settings::{load_settings, ObservabilityConfig, Settings};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
