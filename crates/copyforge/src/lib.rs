//! Facade crate for copyforge.
//!
//! Re-exports the public surface of the workspace crates and hosts the CLI
//! used by the `copyforge` binary.

pub mod cli;

pub use copyforge_client::{ClientConfig, FileConfig, MockDriver, RetryPolicy, ZhipuClient};
pub use copyforge_core::{
    CopyDriver, CopyFormat, GenerationRequest, GenerationResult, Length, Platform,
};
pub use copyforge_error::{
    ClientError, ClientErrorKind, ConfigError, CopyforgeError, CopyforgeResult,
};
pub use copyforge_prompt::{build_prompt, split_variants, CopyGenerator};
