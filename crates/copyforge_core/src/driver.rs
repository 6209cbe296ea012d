//! Driver trait implemented by API clients.

use copyforge_error::ClientResult;

/// Seam between the copy generator and a text-generation backend.
///
/// The generator builds one prompt per request and calls [`generate`] exactly
/// once; implementations own transport, authentication, and retry.
///
/// [`generate`]: CopyDriver::generate
#[async_trait::async_trait]
pub trait CopyDriver: Send + Sync {
    /// Sends the prompt to the backend and returns the raw response text.
    async fn generate(&self, prompt: &str) -> ClientResult<String>;
}
