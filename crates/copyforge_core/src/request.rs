//! Generation request type.

use crate::{CopyFormat, Length, Platform};
use serde::{Deserialize, Serialize};

/// A single copy-generation request.
///
/// Immutable once built; construct through the builder.
///
/// # Examples
///
/// ```
/// use copyforge_core::{CopyFormat, GenerationRequest, Platform};
///
/// let request = GenerationRequest::builder()
///     .brief("一款面向中小企业的社交媒体管理工具")
///     .platform(Platform::Douyin)
///     .format(CopyFormat::Caption)
///     .variant_count(3usize)
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.variant_count(), 3);
/// assert_eq!(request.tone(), "energetic");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct GenerationRequest {
    /// One-line description of the product or video idea
    brief: String,
    /// Target platform
    #[builder(default)]
    platform: Platform,
    /// Script or caption
    #[builder(default)]
    format: CopyFormat,
    /// Tone of voice, e.g. "energetic" or "professional"
    #[builder(default = "String::from(\"energetic\")")]
    tone: String,
    /// Requested copy length
    #[builder(default)]
    length: Length,
    /// Target audience
    #[builder(default = "String::from(\"general\")")]
    audience: String,
    /// Number of variants to generate (>= 1)
    #[builder(default = "1")]
    variant_count: usize,
}

impl GenerationRequest {
    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

impl GenerationRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(brief) = &self.brief {
            if brief.trim().is_empty() {
                return Err("brief must not be empty".to_string());
            }
        }
        if let Some(0) = self.variant_count {
            return Err("variant_count must be at least 1".to_string());
        }
        Ok(())
    }
}
