//! Retry with exponential backoff for API calls.

use copyforge_error::{ClientResult, RetryableError};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

/// Retry configuration for API calls.
///
/// Process-wide constant policy; there is no persisted retry state.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first.
    pub max_attempts: usize,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }
}

/// Retries an operation with exponential backoff.
///
/// Only errors whose [`RetryableError::is_retryable`] returns true are
/// retried; auth and parse failures surface immediately.
#[instrument(skip(operation))]
pub async fn retry_with_backoff<F, Fut, T>(
    policy: &RetryPolicy,
    mut operation: F,
) -> ClientResult<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = ClientResult<T>>,
{
    let mut attempt = 0;
    let mut backoff = policy.initial_backoff;

    loop {
        attempt += 1;
        debug!(attempt, "Executing operation");

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!(attempt, "Operation succeeded after retry");
                }
                return Ok(result);
            }
            Err(err) => {
                if !err.is_retryable() {
                    warn!(%err, "Error is not retryable, failing immediately");
                    return Err(err);
                }

                if attempt >= policy.max_attempts {
                    warn!(attempt, "All retry attempts exhausted");
                    return Err(err);
                }

                debug!(backoff_ms = backoff.as_millis(), "Retrying after failure");
                sleep(backoff).await;

                // Exponential backoff with cap
                backoff = std::cmp::min(
                    Duration::from_secs_f64(backoff.as_secs_f64() * policy.backoff_multiplier),
                    policy.max_backoff,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copyforge_error::{ClientError, ClientErrorKind};
    use std::cell::Cell;

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(4),
            backoff_multiplier: 2.0,
        }
    }

    fn transient() -> ClientError {
        ClientError::new(ClientErrorKind::Http {
            status: 503,
            message: "service unavailable".to_string(),
        })
    }

    #[tokio::test]
    async fn attempts_never_exceed_policy_maximum() {
        let attempts = Cell::new(0usize);
        let result: ClientResult<()> = retry_with_backoff(&fast_policy(), || {
            attempts.set(attempts.get() + 1);
            async { Err(transient()) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(attempts.get(), 3);
    }

    #[tokio::test]
    async fn auth_errors_are_never_retried() {
        let attempts = Cell::new(0usize);
        let result: ClientResult<()> = retry_with_backoff(&fast_policy(), || {
            attempts.set(attempts.get() + 1);
            async {
                Err(ClientError::new(ClientErrorKind::Auth {
                    status: 401,
                    message: "invalid token".to_string(),
                }))
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(attempts.get(), 1);
    }

    #[tokio::test]
    async fn succeeds_after_transient_failure() {
        let attempts = Cell::new(0usize);
        let result = retry_with_backoff(&fast_policy(), || {
            attempts.set(attempts.get() + 1);
            let n = attempts.get();
            async move {
                if n < 2 {
                    Err(transient())
                } else {
                    Ok("文案".to_string())
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "文案");
        assert_eq!(attempts.get(), 2);
    }

    #[tokio::test]
    async fn parse_errors_surface_immediately() {
        let attempts = Cell::new(0usize);
        let result: ClientResult<()> = retry_with_backoff(&fast_policy(), || {
            attempts.set(attempts.get() + 1);
            async {
                Err(ClientError::new(ClientErrorKind::Parse(
                    "truncated body".to_string(),
                )))
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(attempts.get(), 1);
    }
}
