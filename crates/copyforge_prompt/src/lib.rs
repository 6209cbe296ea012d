//! Prompt templating and variant parsing for copyforge.
//!
//! The copy generator builds one prompt per [`GenerationRequest`], calls the
//! driver once, and splits the raw response into discrete variants.
//!
//! [`GenerationRequest`]: copyforge_core::GenerationRequest

mod generator;
mod parse;
mod template;

pub use generator::CopyGenerator;
pub use parse::split_variants;
pub use template::build_prompt;
