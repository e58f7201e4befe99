//! Configuration loading, validation, and management for Frontdesk.
//!
//! Loads configuration from `~/.frontdesk/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use frontdesk_core::Language;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.frontdesk/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key (can be overridden per-provider)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Generative text provider used for fallback replies
    #[serde(default = "default_provider")]
    pub default_provider: String,

    /// Default model
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Default temperature
    #[serde(default = "default_temperature")]
    pub default_temperature: f32,

    /// Max tokens per generated reply
    #[serde(default = "default_max_tokens")]
    pub default_max_tokens: u32,

    /// How long a generated reply may take before the templated reply is used
    #[serde(default = "default_generation_timeout")]
    pub generation_timeout_secs: u64,

    /// Hotel name used in persona prompts
    #[serde(default = "default_hotel_name")]
    pub hotel_name: String,

    /// Language a new session starts in
    #[serde(default)]
    pub default_language: Language,

    /// Providers tried in order after the default one fails
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallback_providers: Vec<String>,

    /// Provider-specific configurations
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,

    /// Gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Speech output configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Scripted reply selection
    #[serde(default)]
    pub selector: SelectorConfig,
}

fn default_provider() -> String {
    "gemini".into()
}
fn default_model() -> String {
    "gemini-2.0-flash".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    512
}
fn default_generation_timeout() -> u64 {
    15
}
fn default_hotel_name() -> String {
    "Hotel Rafaela".into()
}

fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("default_provider", &self.default_provider)
            .field("default_model", &self.default_model)
            .field("default_temperature", &self.default_temperature)
            .field("default_max_tokens", &self.default_max_tokens)
            .field("generation_timeout_secs", &self.generation_timeout_secs)
            .field("hotel_name", &self.hotel_name)
            .field("default_language", &self.default_language)
            .field("providers", &self.providers)
            .field("fallback_providers", &self.fallback_providers)
            .field("gateway", &self.gateway)
            .field("speech", &self.speech)
            .field("selector", &self.selector)
            .finish()
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("default_model", &self.default_model)
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Browser origin allowed by CORS (the widget's dev server by default)
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

fn default_port() -> u16 {
    4317
}
fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_allowed_origin() -> String {
    "http://localhost:5173".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            allowed_origin: default_allowed_origin(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Whether agent turns are voiced at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Playback pacing for the terminal voice (0 disables the wait)
    #[serde(default = "default_words_per_second")]
    pub words_per_second: f32,
}

fn default_true() -> bool {
    true
}
fn default_words_per_second() -> f32 {
    2.5
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            words_per_second: default_words_per_second(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Fixed seed for scripted reply selection; unset means entropy-seeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from the default path (~/.frontdesk/config.toml).
    ///
    /// Also checks environment variables:
    /// - `FRONTDESK_API_KEY` (highest priority), `GEMINI_API_KEY`, `OPENAI_API_KEY`
    /// - `FRONTDESK_PROVIDER`, `FRONTDESK_MODEL`, `FRONTDESK_LANGUAGE`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if self.api_key.is_none() {
            self.api_key = std::env::var("FRONTDESK_API_KEY")
                .ok()
                .or_else(|| std::env::var("GEMINI_API_KEY").ok())
                .or_else(|| std::env::var("OPENAI_API_KEY").ok());
        }

        if let Ok(provider) = std::env::var("FRONTDESK_PROVIDER") {
            self.default_provider = provider;
        }

        if let Ok(model) = std::env::var("FRONTDESK_MODEL") {
            self.default_model = model;
        }

        if let Ok(language) = std::env::var("FRONTDESK_LANGUAGE") {
            self.default_language = language
                .parse()
                .map_err(|e: String| ConfigError::ValidationError(format!("FRONTDESK_LANGUAGE: {e}")))?;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".frontdesk")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.default_temperature) {
            return Err(ConfigError::ValidationError(
                "default_temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.generation_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "generation_timeout_secs must be > 0".into(),
            ));
        }

        let pace = self.speech.words_per_second;
        if !pace.is_finite() || pace < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "speech.words_per_second must be a finite number >= 0 (0 disables pacing), got {pace}"
            )));
        }

        if self.hotel_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "hotel_name must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
            || self
                .providers
                .get(&self.default_provider)
                .is_some_and(|p| p.api_key.is_some())
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            default_provider: default_provider(),
            default_model: default_model(),
            default_temperature: default_temperature(),
            default_max_tokens: default_max_tokens(),
            generation_timeout_secs: default_generation_timeout(),
            hotel_name: default_hotel_name(),
            default_language: Language::default(),
            providers: HashMap::new(),
            fallback_providers: vec![],
            gateway: GatewayConfig::default(),
            speech: SpeechConfig::default(),
            selector: SelectorConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
