//! Generation result type.

use serde::{Deserialize, Serialize};

/// Ordered set of generated copy variants.
///
/// Length matches the requested variant count best-effort; the API may return
/// fewer, never more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationResult {
    /// The generated variants, in response order
    variants: Vec<String>,
}

impl GenerationResult {
    /// Creates a result from parsed variants.
    pub fn new(variants: Vec<String>) -> Self {
        Self { variants }
    }

    /// Number of variants produced.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// True when no variants were produced.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Consumes the result, returning the variant strings.
    pub fn into_variants(self) -> Vec<String> {
        self.variants
    }
}
