//! Payroll service entry point.
//!
//! Loads the optional `.env` file, initializes tracing, reads configuration
//! from the environment, then hands off to the bootstrap which connects to
//! the database and serves until SIGTERM/SIGINT.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use payroll_service::bootstrap;
use payroll_service::config::{AppConfig, LogFormat, DEFAULT_ENV_FILE, DEFAULT_LOG_FILTER};
use payroll_service::env_file::load_env_file;
use payroll_service::http::shutdown_signal;

/// Payroll service HTTP server
#[derive(Parser, Debug)]
#[command(name = "payroll-service", version, about)]
struct Args {
    /// Path to an env file merged into the environment if present
    #[arg(short, long, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Log level filter (e.g., "payroll_service=debug,sqlx=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Before tracing: the file may carry RUST_LOG or LOG_FORMAT
    let env_file = load_env_file(&args.env_file);
    let config = AppConfig::from_env();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    let log_format = config
        .as_ref()
        .map(|c| c.logging.format)
        .unwrap_or_default();
    init_tracing(&log_filter, log_format);

    env_file.log();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        addr = %config.http,
        log_format = ?config.logging.format,
        "Loaded configuration"
    );

    match bootstrap::run(&config, shutdown_signal()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Payroll service terminated");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}
