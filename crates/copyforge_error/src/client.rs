//! API client error types and retry classification.

/// Specific error conditions for API client operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClientErrorKind {
    /// No API key found in the environment
    MissingApiKey,
    /// Authentication rejected by the provider (401/403)
    Auth {
        /// HTTP status code
        status: u16,
        /// Error message from the provider
        message: String,
    },
    /// Non-success HTTP status from the provider
    Http {
        /// HTTP status code
        status: u16,
        /// Error body returned by the provider
        message: String,
    },
    /// Connection-level failure (DNS, refused, reset)
    Network(String),
    /// Request exceeded the configured timeout
    Timeout(String),
    /// Response body could not be interpreted
    Parse(String),
    /// Request could not be constructed
    InvalidRequest(String),
}

impl std::fmt::Display for ClientErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientErrorKind::MissingApiKey => write!(
                f,
                "API key not set: set ZHIPU_API_KEY or BIGMODEL_API_KEY"
            ),
            ClientErrorKind::Auth { status, message } => {
                write!(f, "Authentication failed (HTTP {}): {}", status, message)
            }
            ClientErrorKind::Http { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            ClientErrorKind::Network(msg) => write!(f, "Network error: {}", msg),
            ClientErrorKind::Timeout(msg) => write!(f, "Request timed out: {}", msg),
            ClientErrorKind::Parse(msg) => write!(f, "Failed to parse response: {}", msg),
            ClientErrorKind::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl ClientErrorKind {
    /// Check if this error condition should be retried.
    ///
    /// Transient conditions (timeouts, connection failures, 408/429/5xx)
    /// return true. Auth failures and parse failures return false.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientErrorKind::Http { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            ClientErrorKind::Network(_) => true,
            ClientErrorKind::Timeout(_) => true,
            _ => false,
        }
    }
}

/// API client error with source location tracking.
///
/// # Examples
///
/// ```
/// use copyforge_error::{ClientError, ClientErrorKind};
///
/// let err = ClientError::new(ClientErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("ZHIPU_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientError {
    /// The kind of error that occurred
    pub kind: ClientErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ClientError {
    /// Create a new ClientError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ClientErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Client Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ClientError {}

/// Result type for API client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use copyforge_error::{ClientError, ClientErrorKind, RetryableError};
///
/// let err = ClientError::new(ClientErrorKind::Http {
///     status: 503,
///     message: "Service unavailable".to_string(),
/// });
/// assert!(err.is_retryable());
///
/// let err = ClientError::new(ClientErrorKind::Auth {
///     status: 401,
///     message: "Invalid token".to_string(),
/// });
/// assert!(!err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503 (service unavailable), 429 (rate limit),
    /// or network timeouts should return true. Permanent errors like 401
    /// (unauthorized) or 400 (bad request) should return false.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for ClientError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
