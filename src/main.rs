//! bacheck - HTTP Basic-Authentication auditor CLI

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use bacheck::checker::CheckEngine;
use bacheck::config;
use bacheck::http::HttpClient;
use bacheck::models::{CheckConfig, Status, Thresholds};
use bacheck::report;

/// Audits HTTP endpoints for correct Basic-Authentication enforcement
#[derive(Parser)]
#[command(name = "bacheck", version, about, long_about = None)]
struct Cli {
    /// JSON sites file, see config.json.example
    #[arg(short, long)]
    config: PathBuf,

    /// Failure count at which the run is reported as WARNING
    #[arg(short, long, default_value_t = 1)]
    warning: usize,

    /// Failure count at which the run is reported as CRITICAL
    #[arg(long, default_value_t = 2)]
    critical: usize,

    /// Request timeout in seconds (no deadline when omitted)
    #[arg(long)]
    timeout: Option<u64>,

    /// Disable the progress spinner
    #[arg(long)]
    no_spinner: bool,

    /// Additionally write the full report as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn fail_unknown(message: impl std::fmt::Display) -> ! {
    eprintln!("{} {message}", "Error:".red().bold());
    std::process::exit(Status::Unknown.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "bacheck=debug"
    } else {
        "bacheck=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let sites = match config::load_sites(&cli.config) {
        Ok(sites) => sites,
        Err(e) => fail_unknown(e),
    };

    let check_config = CheckConfig {
        timeout_secs: cli.timeout,
        thresholds: Thresholds {
            warning: cli.warning,
            critical: cli.critical,
        },
        spinner: !cli.no_spinner,
        ..CheckConfig::default()
    };

    let client = match HttpClient::from_config(&check_config) {
        Ok(client) => client,
        Err(e) => fail_unknown(e),
    };

    let engine = CheckEngine::new(client, check_config);
    let audit = engine.run(&sites).await;

    report::table::render(&audit);

    if let Some(ref path) = cli.output {
        if let Err(e) = report::json::export(&audit, path) {
            fail_unknown(e);
        }
    }

    std::process::exit(audit.status.exit_code());
}
