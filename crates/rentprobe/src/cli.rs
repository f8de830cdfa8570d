use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use rentprobe_core::client::{ApiClient, BASE_URL};
use rentprobe_core::config::{ENV_FILE, load_env_file};
use rentprobe_core::context::RunContext;
use rentprobe_core::report::TestReport;
use rentprobe_core::sms::LogScrapeSource;

use crate::scenarios;

/// Rentprobe - smoke tests for the Arenda PRO rental API.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show verbose logs.
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("rentprobe=debug,rentprobe_core=debug")
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing init failed: {e}"))?;
    Ok(())
}

/// Runs the whole smoke suite and returns the process exit code: 0 when every
/// check passed, 1 otherwise.
pub async fn run_app() -> Result<i32> {
    let cli = Cli::parse();

    if cli.verbose {
        setup_logging().context("Failed to set up logging")?;
    }

    // Loaded for diagnostics only; the request target stays hardcoded.
    let env = load_env_file(Path::new(ENV_FILE));
    tracing::debug!(entries = env.len(), "environment file loaded");

    let client = ApiClient::new(BASE_URL).context("Failed to build API client")?;
    let codes = LogScrapeSource::default();

    println!(
        "{}",
        style(format!("Smoke testing API at {BASE_URL}/api")).bold()
    );

    let mut ctx = RunContext::default();
    let mut report = TestReport::new();
    scenarios::run_all(&client, &codes, &mut ctx, &mut report).await;
    report.summary();

    Ok(if report.is_success() { 0 } else { 1 })
}

pub fn present_error(error: anyhow::Error) {
    eprintln!("\n{} {error}", style("ERROR:").red().bold());
}
