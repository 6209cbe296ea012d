//! Output format for generated copy.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Whether to produce a full video script or a short caption.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CopyFormat {
    /// Full script with hook, main points, and call-to-action.
    #[default]
    Script,
    /// Short title plus hashtags.
    Caption,
}
