//! Copy generator: one prompt, one call, parsed variants.

use crate::{build_prompt, split_variants};
use copyforge_core::{CopyDriver, GenerationRequest, GenerationResult};
use copyforge_error::CopyforgeResult;
use tracing::{debug, instrument, warn};

/// Generates copy variants through a [`CopyDriver`].
pub struct CopyGenerator {
    driver: Box<dyn CopyDriver>,
}

impl CopyGenerator {
    /// Creates a generator backed by the given driver.
    pub fn new(driver: Box<dyn CopyDriver>) -> Self {
        Self { driver }
    }

    /// Generates variants for the request.
    ///
    /// Builds one prompt, calls the driver once, and splits the response.
    /// A response that parses into fewer variants than requested is returned
    /// as-is; the pipeline is not retried on a parse shortfall.
    #[instrument(
        skip(self, request),
        fields(platform = %request.platform(), requested = request.variant_count())
    )]
    pub async fn generate_variants(
        &self,
        request: &GenerationRequest,
    ) -> CopyforgeResult<GenerationResult> {
        let prompt = build_prompt(request);
        debug!(prompt_chars = prompt.chars().count(), "Built prompt");

        let raw = self.driver.generate(&prompt).await?;

        let requested = *request.variant_count();
        let variants = split_variants(&raw, requested);
        if variants.len() < requested {
            warn!(
                parsed = variants.len(),
                requested, "Parsed fewer variants than requested"
            );
        }

        Ok(GenerationResult::new(variants))
    }
}
