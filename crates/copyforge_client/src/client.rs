//! Zhipu/BigModel chat-completions client.

use crate::config::{ClientConfig, CHAT_PATH, MODELS_PATH};
use crate::dto::{ChatMessage, ChatRequest, ChatResponse, ModelsResponse};
use crate::retry::{retry_with_backoff, RetryPolicy};
use copyforge_core::CopyDriver;
use copyforge_error::{ClientError, ClientErrorKind, ClientResult};
use tracing::{debug, error, instrument};

const DEFAULT_SYSTEM_PROMPT: &str = "你是一个有用的AI助手。";

/// Client for the Zhipu (BigModel) chat-completions API.
///
/// Wraps the OpenAI-compatible endpoint with bearer auth, per-request
/// timeouts, and retry-with-backoff on transient failures.
#[derive(Debug, Clone)]
pub struct ZhipuClient {
    client: reqwest::Client,
    config: ClientConfig,
    retry: RetryPolicy,
}

impl ZhipuClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(*config.timeout())
            .build()
            .map_err(|e| {
                ClientError::new(ClientErrorKind::InvalidRequest(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        debug!(
            base_url = %config.base_url(),
            model = %config.model(),
            "Created Zhipu client"
        );

        Ok(Self {
            client,
            config,
            retry: RetryPolicy::default(),
        })
    }

    /// Creates a client from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Replaces the default retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url().trim_end_matches('/'), path)
    }

    /// Sends one chat request, classifying failures into retryable and
    /// fatal kinds. Retry happens in the caller.
    #[instrument(skip(self, request), fields(model = %self.config.model()))]
    async fn send_chat(&self, request: &ChatRequest) -> ClientResult<ChatResponse> {
        debug!(message_count = request.messages().len(), "Sending request");

        let response = self
            .client
            .post(self.endpoint(CHAT_PATH))
            .bearer_auth(self.config.api_key())
            .json(request)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, error = %message, "API error");

            let kind = if matches!(status.as_u16(), 401 | 403) {
                ClientErrorKind::Auth {
                    status: status.as_u16(),
                    message,
                }
            } else {
                ClientErrorKind::Http {
                    status: status.as_u16(),
                    message,
                }
            };
            return Err(ClientError::new(kind));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            ClientError::new(ClientErrorKind::Parse(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");
        Ok(chat_response)
    }

    /// Lists the model ids available at the endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self))]
    pub async fn list_models(&self) -> ClientResult<Vec<String>> {
        let response = self
            .client
            .get(self.endpoint(MODELS_PATH))
            .bearer_auth(self.config.api_key())
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::new(ClientErrorKind::Http {
                status: status.as_u16(),
                message,
            }));
        }

        let models: ModelsResponse = response.json().await.map_err(|e| {
            ClientError::new(ClientErrorKind::Parse(format!(
                "Failed to parse model listing: {}",
                e
            )))
        })?;

        Ok(models.data.into_iter().map(|m| m.id).collect())
    }
}

#[async_trait::async_trait]
impl CopyDriver for ZhipuClient {
    /// Sends the prompt and returns the first choice's content.
    ///
    /// Transient failures are retried per the configured [`RetryPolicy`];
    /// auth failures surface immediately.
    #[instrument(skip(self, prompt), fields(model = %self.config.model()))]
    async fn generate(&self, prompt: &str) -> ClientResult<String> {
        let request = ChatRequest::builder()
            .model(self.config.model().clone())
            .messages(vec![
                ChatMessage::system(DEFAULT_SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ])
            .temperature(Some(*self.config.temperature()))
            .max_tokens(*self.config.max_tokens())
            .stream(Some(false))
            .build()
            .map_err(|e| {
                ClientError::new(ClientErrorKind::InvalidRequest(format!(
                    "Failed to build request: {}",
                    e
                )))
            })?;

        let response = retry_with_backoff(&self.retry, || self.send_chat(&request)).await?;

        let content = response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                ClientError::new(ClientErrorKind::Parse("No choices in response".to_string()))
            })?;

        if content.trim().is_empty() {
            return Err(ClientError::new(ClientErrorKind::Parse(
                "Empty completion content".to_string(),
            )));
        }

        Ok(content)
    }
}

fn classify_transport(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::new(ClientErrorKind::Timeout(e.to_string()))
    } else {
        ClientError::new(ClientErrorKind::Network(e.to_string()))
    }
}
