//! Client configuration from environment variables and optional TOML file.

use copyforge_error::{ClientError, ClientErrorKind, ClientResult, ConfigError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use typed_builder::TypedBuilder;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://open.bigmodel.cn";
/// Chat completions path under the base URL.
pub const CHAT_PATH: &str = "/api/paas/v4/chat/completions";
/// Model listing path under the base URL.
pub const MODELS_PATH: &str = "/api/paas/v4/models";

const DEFAULT_MODEL: &str = "glm-4.5-flash";
const DEFAULT_TEMPERATURE: f32 = 1.0;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Zhipu client.
#[derive(Debug, Clone, Getters, TypedBuilder)]
pub struct ClientConfig {
    /// API key sent as a bearer token
    #[builder(setter(into))]
    api_key: String,
    /// API base URL
    #[builder(default = DEFAULT_BASE_URL.to_string(), setter(into))]
    base_url: String,
    /// Model identifier
    #[builder(default = DEFAULT_MODEL.to_string(), setter(into))]
    model: String,
    /// Sampling temperature
    #[builder(default = DEFAULT_TEMPERATURE)]
    temperature: f32,
    /// Optional token limit per response
    #[builder(default, setter(strip_option))]
    max_tokens: Option<u32>,
    /// Per-request timeout
    #[builder(default = Duration::from_secs(DEFAULT_TIMEOUT_SECS))]
    timeout: Duration,
}

impl ClientConfig {
    /// Build a configuration from environment variables.
    ///
    /// The API key is read from `ZHIPU_API_KEY`, falling back to
    /// `BIGMODEL_API_KEY` and then `DEEPSEEK_API_KEY`. The base URL can be
    /// overridden with `BIGMODEL_BASE_URL`.
    #[tracing::instrument]
    pub fn from_env() -> ClientResult<Self> {
        let api_key = std::env::var("ZHIPU_API_KEY")
            .or_else(|_| std::env::var("BIGMODEL_API_KEY"))
            .or_else(|_| std::env::var("DEEPSEEK_API_KEY"))
            .map_err(|_| ClientError::new(ClientErrorKind::MissingApiKey))?;

        let base_url =
            std::env::var("BIGMODEL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self::builder().api_key(api_key).base_url(base_url).build())
    }

    /// Apply overrides from a TOML config file on top of this configuration.
    pub fn with_overrides(mut self, overrides: &FileConfig) -> Self {
        if let Some(base_url) = overrides.base_url() {
            self.base_url = base_url.clone();
        }
        if let Some(model) = overrides.model() {
            self.model = model.clone();
        }
        if let Some(temperature) = overrides.temperature() {
            self.temperature = *temperature;
        }
        if let Some(max_tokens) = overrides.max_tokens() {
            self.max_tokens = Some(*max_tokens);
        }
        if let Some(secs) = overrides.timeout_secs() {
            self.timeout = Duration::from_secs(*secs);
        }
        self
    }
}

/// Optional overrides loaded from a TOML config file.
///
/// Every field is optional; unset fields keep the environment-derived value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
pub struct FileConfig {
    /// API base URL
    base_url: Option<String>,
    /// Model identifier
    model: Option<String>,
    /// Sampling temperature
    temperature: Option<f32>,
    /// Token limit per response
    max_tokens: Option<u32>,
    /// Per-request timeout in seconds
    timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load overrides from a TOML file.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}
