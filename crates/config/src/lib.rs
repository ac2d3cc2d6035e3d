//! Configuration management for the tourism assistant engine
//!
//! Supports loading configuration from:
//! - TOML files (`config/default.toml` by default)
//! - Environment variables (`TOURBOT__` prefix)
//!
//! Algorithmic calibration constants live in [`constants`]; deployment knobs
//! live in [`Settings`].

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, EngineConfig, PersonalizationConfig, ServerConfig, Settings,
};

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
