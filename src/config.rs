//! Runtime settings read from the environment.
//!
//! Values come from the process environment (plus `.env` on native builds),
//! falling back to the bundled `assets/config.env`.

use crate::types::{Language, UnknownLanguage};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::env;
use std::time::Duration;

static ACTIVE: OnceCell<AppConfig> = OnceCell::new();

pub const ENV_LANGUAGE: &str = "AMBULANCE_LANGUAGE";
pub const ENV_TYPING_DELAY_MS: &str = "AMBULANCE_TYPING_DELAY_MS";
pub const ENV_CHAT_OPEN_DELAY_MS: &str = "AMBULANCE_CHAT_OPEN_DELAY_MS";
pub const ENV_COUNTDOWN_SECS: &str = "AMBULANCE_COUNTDOWN_SECS";
pub const ENV_AUTO_SPEAK: &str = "AMBULANCE_AUTO_SPEAK";
pub const ENV_SPEECH_RATE: &str = "AMBULANCE_SPEECH_RATE";
pub const ENV_SPEECH_PITCH: &str = "AMBULANCE_SPEECH_PITCH";
pub const ENV_LOG: &str = "AMBULANCE_LOG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub language: Language,
    pub typing_delay: Duration,
    pub chat_open_delay: Duration,
    pub countdown_secs: u32,
    pub auto_speak: bool,
    pub speech_rate: f32,
    pub speech_pitch: f32,
    pub log_level: tracing::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            typing_delay: Duration::from_millis(1000),
            chat_open_delay: Duration::from_millis(2000),
            countdown_secs: 5,
            auto_speak: false,
            speech_rate: 1.0,
            speech_pitch: 1.0,
            log_level: tracing::Level::INFO,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Environment first, then the `KEY=VALUE` pairs of a bundled env file.
    pub fn from_env_with_fallback(bundled: &str) -> Result<Self, ConfigError> {
        let bundled = parse_env_file(bundled);
        Self::from_lookup(|key| env::var(key).ok().or_else(|| bundled.get(key).cloned()))
    }

    /// Builds a config from any key lookup. Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(code) = lookup(ENV_LANGUAGE) {
            config.language = code.parse()?;
        }
        if let Some(raw) = lookup(ENV_TYPING_DELAY_MS) {
            config.typing_delay = Duration::from_millis(parse_number(ENV_TYPING_DELAY_MS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_CHAT_OPEN_DELAY_MS) {
            config.chat_open_delay =
                Duration::from_millis(parse_number(ENV_CHAT_OPEN_DELAY_MS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_COUNTDOWN_SECS) {
            config.countdown_secs = parse_number(ENV_COUNTDOWN_SECS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_AUTO_SPEAK) {
            config.auto_speak = parse_flag(&raw);
        }
        if let Some(raw) = lookup(ENV_SPEECH_RATE) {
            config.speech_rate = parse_speech_param(ENV_SPEECH_RATE, &raw, 0.1, 10.0)?;
        }
        if let Some(raw) = lookup(ENV_SPEECH_PITCH) {
            config.speech_pitch = parse_speech_param(ENV_SPEECH_PITCH, &raw, 0.0, 2.0)?;
        }
        if let Some(raw) = lookup(ENV_LOG) {
            config.log_level = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_LOG,
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}

/// Makes `config` the process-wide settings. Only the first call wins.
pub fn install(config: AppConfig) {
    if ACTIVE.set(config).is_err() {
        tracing::warn!("app config already installed; keeping the first one");
    }
}

pub fn current() -> AppConfig {
    ACTIVE.get().cloned().unwrap_or_default()
}

pub fn parse_env_file(contents: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    values
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

// Truthy spellings; anything else reads as off.
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_speech_param(
    key: &'static str,
    raw: &str,
    min: f32,
    max: f32,
) -> Result<f32, ConfigError> {
    let value: f32 = parse_number(key, raw)?;
    if !(min..=max).contains(&value) {
        return Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_LANGUAGE, "mr"),
            (ENV_TYPING_DELAY_MS, "250"),
            (ENV_COUNTDOWN_SECS, "10"),
            (ENV_AUTO_SPEAK, "Yes"),
            (ENV_SPEECH_RATE, "1.5"),
            (ENV_LOG, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.language, Language::Marathi);
        assert_eq!(config.typing_delay, Duration::from_millis(250));
        assert_eq!(config.countdown_secs, 10);
        assert!(config.auto_speak);
        assert_eq!(config.speech_rate, 1.5);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_unknown_language_is_error() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_LANGUAGE, "fr")])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLanguage(_)));
    }

    #[test]
    fn test_invalid_number_is_error() {
        let err =
            AppConfig::from_lookup(lookup_from(&[(ENV_COUNTDOWN_SECS, "soon")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for AMBULANCE_COUNTDOWN_SECS: 'soon'"
        );
    }

    #[test]
    fn test_pitch_out_of_range() {
        assert!(AppConfig::from_lookup(lookup_from(&[(ENV_SPEECH_PITCH, "3")])).is_err());
    }

    #[test]
    fn test_parse_env_file() {
        let values = parse_env_file("# comment\n\nAMBULANCE_LANGUAGE = hi\nBROKEN LINE\n");
        assert_eq!(values.len(), 1);
        assert_eq!(values.get(ENV_LANGUAGE).map(String::as_str), Some("hi"));
    }

    #[test]
    fn test_environment_overrides_bundled_file() {
        let bundled = "AMBULANCE_COUNTDOWN_SECS=5\nAMBULANCE_TYPING_DELAY_MS=250\n";
        // Only this test touches the real environment.
        unsafe {
            env::set_var(ENV_COUNTDOWN_SECS, "9");
            env::remove_var(ENV_TYPING_DELAY_MS);
        }

        let config = AppConfig::from_env_with_fallback(bundled).unwrap();

        unsafe {
            env::remove_var(ENV_COUNTDOWN_SECS);
        }
        assert_eq!(config.countdown_secs, 9);
        assert_eq!(config.typing_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag("on"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("nope"));
    }
}
