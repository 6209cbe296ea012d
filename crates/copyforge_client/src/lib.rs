//! Zhipu/BigModel chat-completions client for copyforge.
//!
//! Implements [`CopyDriver`](copyforge_core::CopyDriver) over the
//! OpenAI-compatible chat endpoint with retry-with-backoff on transient
//! failures, plus an offline [`MockDriver`] for tests and `--mock` runs.

mod client;
mod config;
mod dto;
mod mock;
mod retry;

pub use client::ZhipuClient;
pub use config::{ClientConfig, FileConfig, CHAT_PATH, DEFAULT_BASE_URL, MODELS_PATH};
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage, ModelInfo, ModelsResponse};
pub use mock::MockDriver;
pub use retry::{retry_with_backoff, RetryPolicy};
