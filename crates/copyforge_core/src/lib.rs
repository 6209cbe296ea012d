//! Core data types for the copyforge copy-generation tool.
//!
//! This crate provides the request/result types shared by the API client and
//! the copy generator, plus the [`CopyDriver`] seam between them.

mod driver;
mod format;
mod length;
mod platform;
mod request;
mod result;

pub use driver::CopyDriver;
pub use format::CopyFormat;
pub use length::Length;
pub use platform::Platform;
pub use request::{GenerationRequest, GenerationRequestBuilder, GenerationRequestBuilderError};
pub use result::GenerationResult;
