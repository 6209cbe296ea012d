//! Offline driver returning canned variants.

use copyforge_core::CopyDriver;
use copyforge_error::ClientResult;
use std::fmt::Write;
use tracing::debug;

const BRIEF_HEADER: &str = "## 产品/服务描述";

/// Driver for `--mock` runs and tests. Makes no network calls and returns a
/// canned numbered list with exactly the configured number of entries.
#[derive(Debug, Clone)]
pub struct MockDriver {
    variant_count: usize,
}

impl MockDriver {
    /// Creates a mock driver producing `variant_count` canned variants.
    pub fn new(variant_count: usize) -> Self {
        Self { variant_count }
    }
}

#[async_trait::async_trait]
impl CopyDriver for MockDriver {
    async fn generate(&self, prompt: &str) -> ClientResult<String> {
        // Echo the brief line from the prompt so mock output stays traceable.
        let brief = prompt
            .lines()
            .skip_while(|line| line.trim() != BRIEF_HEADER)
            .nth(1)
            .map(|line| line.trim().chars().take(80).collect::<String>())
            .filter(|line| !line.is_empty())
            .unwrap_or_else(|| "(brief)".to_string());

        debug!(variants = self.variant_count, "Generating mock response");

        let mut out = String::new();
        for i in 1..=self.variant_count {
            let _ = writeln!(out, "{}. [MOCK] 文案变体{}，基于: {}", i, i, brief);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_emits_requested_count() {
        let driver = MockDriver::new(3);
        let prompt = format!("{}\n一款便携咖啡机\n", BRIEF_HEADER);
        let raw = driver.generate(&prompt).await.unwrap();

        let lines: Vec<&str> = raw.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("一款便携咖啡机"));
        assert!(lines[2].starts_with("3."));
    }

    #[tokio::test]
    async fn mock_survives_missing_brief_section() {
        let driver = MockDriver::new(1);
        let raw = driver.generate("just a bare prompt").await.unwrap();
        assert!(raw.contains("(brief)"));
    }
}
