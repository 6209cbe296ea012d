//! Target platform for generated copy.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Platform the copy is written for.
///
/// Parsed case-insensitively from the CLI; unrecognized names pass through as
/// [`Platform::Other`] so new platforms work without a code change.
///
/// # Examples
///
/// ```
/// use copyforge_core::Platform;
/// use std::str::FromStr;
///
/// assert_eq!(Platform::from_str("douyin").unwrap(), Platform::Douyin);
/// assert_eq!(Platform::from_str("TikTok").unwrap(), Platform::Tiktok);
/// assert_eq!(
///     Platform::from_str("kuaishou").unwrap(),
///     Platform::Other("kuaishou".to_string()),
/// );
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Douyin,
    Tiktok,
    Youtube,
    Bilibili,
    Xiaohongshu,
    /// Generic short-video platform (the default).
    #[default]
    #[strum(serialize = "short-video")]
    #[serde(rename = "short-video")]
    ShortVideo,
    /// Any platform name not in the known set.
    #[strum(default)]
    Other(String),
}
