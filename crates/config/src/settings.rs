//! Main settings module
//!
//! Settings are layered: `config/default.toml` (optional) is overridden by
//! `TOURBOT__`-prefixed environment variables, e.g.
//! `TOURBOT__SERVER__PORT=9000` or `TOURBOT__ENGINE__DEFAULT_LANGUAGE=si`.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use tourbot_core::Language;

use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Engine configuration
    #[serde(default)]
    pub engine: EngineConfig,

    /// Personalization configuration
    #[serde(default)]
    pub personalization: PersonalizationConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable permissive CORS (development only)
    #[serde(default = "default_true")]
    pub cors_permissive: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_permissive: true,
        }
    }
}

/// Conversation engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Language used when detection is ambiguous and for new sessions
    /// without an explicit preference
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Maximum retained turns per session (FIFO eviction beyond this)
    #[serde(default = "default_history_cap")]
    pub history_cap: usize,

    /// Detection confidence above which a session's language is switched
    #[serde(default = "default_switch_threshold")]
    pub language_switch_threshold: f32,

    /// Maximum concurrently active sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Idle time after which the sweeper resets a session (seconds)
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Interval between sweeper runs (seconds)
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

fn default_language() -> String {
    "en".to_string()
}
fn default_history_cap() -> usize {
    50
}
fn default_switch_threshold() -> f32 {
    0.7
}
fn default_max_sessions() -> usize {
    1000
}
fn default_session_ttl() -> u64 {
    3600
}
fn default_sweep_interval() -> u64 {
    300
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            history_cap: default_history_cap(),
            language_switch_threshold: default_switch_threshold(),
            max_sessions: default_max_sessions(),
            session_ttl_secs: default_session_ttl(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

impl EngineConfig {
    /// Parsed default language
    pub fn default_language(&self) -> Language {
        Language::from_str_loose(&self.default_language).unwrap_or_default()
    }
}

/// Personalization layer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizationConfig {
    /// Fixed RNG seed; set in tests to make replies reproducible, leave
    /// unset in production for entropy-seeded variety
    #[serde(default)]
    pub seed: Option<u64>,

    /// Chance of appending a personal-touch line once history is non-empty
    #[serde(default = "default_personal_touch")]
    pub personal_touch_probability: f64,

    /// Chance of appending an encouragement line (all intents but farewell)
    #[serde(default = "default_encouragement")]
    pub encouragement_probability: f64,
}

fn default_personal_touch() -> f64 {
    0.3
}
fn default_encouragement() -> f64 {
    0.4
}

impl Default for PersonalizationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            personal_touch_probability: default_personal_touch(),
            encouragement_probability: default_encouragement(),
        }
    }
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Language::from_str_loose(&self.engine.default_language).is_none() {
            return Err(ConfigError::InvalidValue {
                field: "engine.default_language".to_string(),
                message: format!("unsupported language '{}'", self.engine.default_language),
            });
        }

        if self.engine.history_cap == 0 {
            return Err(ConfigError::InvalidValue {
                field: "engine.history_cap".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.engine.max_sessions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "engine.max_sessions".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.engine.language_switch_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "engine.language_switch_threshold".to_string(),
                message: "must be within [0, 1]".to_string(),
            });
        }

        for (field, value) in [
            (
                "personalization.personal_touch_probability",
                self.personalization.personal_touch_probability,
            ),
            (
                "personalization.encouragement_probability",
                self.personalization.encouragement_probability,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "must be within [0, 1]".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Load settings from the optional config file plus environment overrides
pub fn load_settings(path: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name(path.unwrap_or("config/default")).required(false));

    builder = builder.add_source(
        Environment::with_prefix("TOURBOT")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.engine.history_cap, 50);
        assert_eq!(settings.engine.default_language(), Language::English);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_language() {
        let mut settings = Settings::default();
        settings.engine.default_language = "klingon".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_threshold() {
        let mut settings = Settings::default();
        settings.engine.language_switch_threshold = 1.5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_history_cap() {
        let mut settings = Settings::default();
        settings.engine.history_cap = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[engine]\ndefault_language = \"si\"\nhistory_cap = 10\n"
        )
        .unwrap();

        let path_str = path.to_str().unwrap().trim_end_matches(".toml").to_string();
        let settings = load_settings(Some(&path_str)).unwrap();
        assert_eq!(settings.engine.default_language(), Language::Sinhala);
        assert_eq!(settings.engine.history_cap, 10);
        // Untouched sections keep their defaults
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let settings = load_settings(Some("does/not/exist")).unwrap();
        assert_eq!(settings.engine.history_cap, 50);
    }
}
