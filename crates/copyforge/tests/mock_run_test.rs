//! End-to-end mock runs through the CLI path. No network access.

use clap::Parser;
use copyforge::cli::{run, Cli};
use std::path::PathBuf;

fn temp_out(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("copyforge-test-{}-{}.json", name, std::process::id()))
}

#[tokio::test]
async fn mock_run_writes_requested_variant_count() {
    let out = temp_out("douyin-caption");
    let cli = Cli::parse_from([
        "copyforge",
        "一款面向中小企业的社交媒体管理工具",
        "-p",
        "douyin",
        "-f",
        "caption",
        "-t",
        "energetic",
        "-l",
        "short",
        "-n",
        "3",
        "--mock",
        "--out",
        out.to_str().unwrap(),
    ]);

    run(cli).await.unwrap();

    let json = std::fs::read_to_string(&out).unwrap();
    let variants: Vec<String> = serde_json::from_str(&json).unwrap();
    std::fs::remove_file(&out).ok();

    assert_eq!(variants.len(), 3);
    for variant in &variants {
        assert!(!variant.trim().is_empty());
    }
}

#[tokio::test]
async fn mock_run_defaults_to_single_variant() {
    let out = temp_out("defaults");
    let cli = Cli::parse_from([
        "copyforge",
        "便携咖啡机",
        "--mock",
        "--out",
        out.to_str().unwrap(),
    ]);

    run(cli).await.unwrap();

    let json = std::fs::read_to_string(&out).unwrap();
    let variants: Vec<String> = serde_json::from_str(&json).unwrap();
    std::fs::remove_file(&out).ok();

    assert_eq!(variants.len(), 1);
}

#[tokio::test]
async fn zero_variants_fails_before_any_call() {
    let cli = Cli::parse_from(["copyforge", "便携咖啡机", "--mock", "-n", "0"]);
    assert!(run(cli).await.is_err());
}
