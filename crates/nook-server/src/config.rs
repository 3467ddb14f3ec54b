use nook_inference::{HuggingFaceRewriter, RewriterSettings};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_grammar_model")]
    pub grammar_model: String,
    #[serde(default = "default_paraphrase_model")]
    pub paraphrase_model: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_api_url() -> String {
    HuggingFaceRewriter::DEFAULT_API_BASE.to_string()
}

fn default_grammar_model() -> String {
    HuggingFaceRewriter::DEFAULT_GRAMMAR_MODEL.to_string()
}

fn default_paraphrase_model() -> String {
    HuggingFaceRewriter::DEFAULT_PARAPHRASE_MODEL.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            grammar_model: default_grammar_model(),
            paraphrase_model: default_paraphrase_model(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl InferenceConfig {
    /// The configured key, or `HUGGINGFACE_API_KEY` from the environment.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()))
    }

    pub fn to_settings(&self, api_key: Option<String>) -> RewriterSettings {
        RewriterSettings {
            api_url: self.api_url.clone(),
            api_key,
            grammar_model: self.grammar_model.clone(),
            paraphrase_model: self.paraphrase_model.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse { source: e })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Validation("Server host must not be empty".to_string()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Server port must not be 0".to_string()));
        }
        if self.inference.grammar_model.trim().is_empty()
            || self.inference.paraphrase_model.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "Inference model ids must not be empty".to_string(),
            ));
        }
        if self.inference.timeout_seconds == 0 {
            return Err(ConfigError::Validation(
                "Inference timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },
    #[error("Config validation error: {0}")]
    Validation(String),
}
