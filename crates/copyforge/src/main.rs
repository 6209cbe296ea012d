//! Entry point for the copyforge binary.

use anyhow::Result;
use clap::Parser;
use copyforge::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    copyforge::cli::run(cli).await
}
