//! Binary crate for the `weathercli` command-line tool.
//!
//! This crate focuses on:
//! - Driving one invocation from raw arguments to printed output
//! - Human-friendly, colored output
//! - Logging setup

use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, fmt};
use weathercli_core::{Config, fetcher_from_config};

mod cli;
mod output;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let outcome = cli::Cli::from_env()
        .run(|| {
            let config = Config::load()?;
            fetcher_from_config(&config)
        })
        .await;

    outcome.emit();
    outcome.exit_code()
}

/// Initialize global tracing subscriber on stderr.
///
/// - Uses `RUST_LOG` if set (e.g. `RUST_LOG=weathercli=debug,weathercli_core=debug`)
/// - Otherwise only warnings are shown, keeping stdout for the report.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("weathercli=warn,weathercli_core=warn"));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
