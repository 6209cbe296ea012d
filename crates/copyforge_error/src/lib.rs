//! Error types for the copyforge copy-generation tool.
//!
//! Each failure domain gets its own kind enum plus a location-tracking error
//! struct, aggregated into [`CopyforgeError`] for callers that cross domains.

mod client;
mod config;

pub use client::{ClientError, ClientErrorKind, ClientResult, RetryableError};
pub use config::ConfigError;

use derive_more::{Display, From};

/// Aggregate error for operations that span multiple failure domains.
#[derive(Debug, Clone, Display, From)]
pub enum CopyforgeError {
    /// API client failure (network, auth, response parsing).
    #[display("{}", _0)]
    Client(ClientError),
    /// Configuration or environment failure.
    #[display("{}", _0)]
    Config(ConfigError),
}

impl std::error::Error for CopyforgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CopyforgeError::Client(e) => Some(e),
            CopyforgeError::Config(e) => Some(e),
        }
    }
}

/// Result type for operations returning [`CopyforgeError`].
pub type CopyforgeResult<T> = Result<T, CopyforgeError>;
