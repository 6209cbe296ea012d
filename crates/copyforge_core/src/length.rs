//! Requested copy length.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Length of the generated copy.
///
/// Accepts the named presets or a free-form duration string such as "30s" or
/// "1min", which is passed to the model verbatim.
///
/// # Examples
///
/// ```
/// use copyforge_core::Length;
/// use std::str::FromStr;
///
/// assert_eq!(Length::from_str("short").unwrap(), Length::Short);
/// assert_eq!(
///     Length::from_str("30s").unwrap(),
///     Length::Duration("30s".to_string()),
/// );
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Length {
    #[default]
    Short,
    Medium,
    Long,
    /// Explicit duration string, e.g. "30s" or "2min".
    #[strum(default)]
    Duration(String),
}
