//! Command handlers for the copyforge binary.

use super::Cli;
use anyhow::Context;
use copyforge_client::{ClientConfig, FileConfig, MockDriver, ZhipuClient};
use copyforge_core::{CopyDriver, GenerationRequest};
use copyforge_prompt::CopyGenerator;
use std::path::Path;
use tracing::info;

/// Runs the parsed CLI invocation.
///
/// Exit code is carried through the error: auth failures, exhausted retries,
/// and a missing API key all surface as a non-zero exit from main.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.list_models {
        return handle_list_models(cli.config.as_deref()).await;
    }

    let brief = cli.brief.clone().context("brief is required")?;

    let request = GenerationRequest::builder()
        .brief(brief)
        .platform(cli.platform.clone())
        .format(cli.format)
        .tone(cli.tone.clone())
        .length(cli.length.clone())
        .audience(cli.audience.clone())
        .variant_count(cli.number)
        .build()?;

    let driver: Box<dyn CopyDriver> = if cli.mock {
        Box::new(MockDriver::new(*request.variant_count()))
    } else {
        Box::new(build_client(cli.config.as_deref())?)
    };

    let generator = CopyGenerator::new(driver);
    let result = generator.generate_variants(&request).await?;

    write_output(result.variants(), cli.out.as_deref())
}

async fn handle_list_models(config_path: Option<&Path>) -> anyhow::Result<()> {
    let client = build_client(config_path)?;
    let models = client.list_models().await?;
    println!("{}", serde_json::to_string_pretty(&models)?);
    Ok(())
}

fn build_client(config_path: Option<&Path>) -> anyhow::Result<ZhipuClient> {
    let mut config = ClientConfig::from_env()?;
    if let Some(path) = config_path {
        config = config.with_overrides(&FileConfig::from_file(path)?);
    }
    Ok(ZhipuClient::new(config)?)
}

fn write_output(variants: &[String], out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(variants)?;

    match out {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(count = variants.len(), path = %path.display(), "Saved variants");
        }
        None => println!("{}", json),
    }
    Ok(())
}
