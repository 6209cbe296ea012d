//! CLI argument definitions.

use clap::Parser;
use copyforge_core::{CopyFormat, Length, Platform};
use std::path::PathBuf;

/// Generate short marketing copy (video scripts or captions) from a one-line
/// product brief.
#[derive(Parser, Debug, Clone)]
#[command(name = "copyforge", version, about)]
pub struct Cli {
    /// Short brief describing the product or video idea
    #[arg(required_unless_present = "list_models")]
    pub brief: Option<String>,

    /// Platform (e.g. douyin, tiktok, youtube)
    #[arg(short = 'p', long, default_value = "short-video")]
    pub platform: Platform,

    /// Format: script or caption
    #[arg(short = 'f', long = "format", alias = "fmt", default_value = "script")]
    pub format: CopyFormat,

    /// Tone (e.g. energetic, professional)
    #[arg(short = 't', long, default_value = "energetic")]
    pub tone: String,

    /// Length: short, medium, long, or a duration string such as "30s"
    #[arg(short = 'l', long, default_value = "short")]
    pub length: Length,

    /// Target audience
    #[arg(short = 'a', long, default_value = "general")]
    pub audience: String,

    /// Number of variants to generate
    #[arg(short = 'n', long = "number", default_value_t = 1)]
    pub number: usize,

    /// Output file (JSON array). If omitted, prints to stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Run in mock/offline mode (no network)
    #[arg(long)]
    pub mock: bool,

    /// List the models available at the endpoint and exit
    #[arg(long)]
    pub list_models: bool,

    /// Optional TOML config file with client overrides
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_flag_set() {
        let cli = Cli::parse_from([
            "copyforge",
            "一款便携咖啡机",
            "-p",
            "douyin",
            "--fmt",
            "caption",
            "-t",
            "energetic",
            "-l",
            "short",
            "-n",
            "3",
            "--mock",
        ]);

        assert_eq!(cli.brief.as_deref(), Some("一款便携咖啡机"));
        assert_eq!(cli.platform, Platform::Douyin);
        assert_eq!(cli.format, CopyFormat::Caption);
        assert_eq!(cli.number, 3);
        assert!(cli.mock);
    }

    #[test]
    fn brief_is_optional_only_for_model_listing() {
        assert!(Cli::try_parse_from(["copyforge"]).is_err());
        assert!(Cli::try_parse_from(["copyforge", "--list-models"]).is_ok());
    }

    #[test]
    fn duration_length_parses() {
        let cli = Cli::parse_from(["copyforge", "便携咖啡机", "-l", "45s"]);
        assert_eq!(cli.length, Length::Duration("45s".to_string()));
    }
}
