//! issucheck - Check if an SRX cluster is ready for ISSU (KB17946)
//!
//! For every target device this tool fetches model and version per routing
//! engine and prints which services are not supported during ISSU/ICU.

use clap::Parser;
use issucheck::cli::CliArgs;
use issucheck::device::{HttpClient, JunosRestConnector};
use issucheck::inventory::{resolve_targets, Inventory};
use issucheck::orchestrator::Orchestrator;
use issucheck::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_logging(args.verbose);

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Set up env_logger on stderr; RUST_LOG overrides the flag-derived level
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    log::debug!("issucheck v{}", env!("CARGO_PKG_VERSION"));

    let inventory = match &args.inventory {
        Some(path) => Some(Inventory::load(path)?),
        None => None,
    };
    let targets = resolve_targets(&args, inventory.as_ref())?;
    log::debug!("{} target(s): {:?}", targets.len(), targets);

    let client = HttpClient::with_config(args.timeout, args.insecure)?;
    let orchestrator = Orchestrator::new(targets, JunosRestConnector::new(client))
        .with_progress(args.show_progress());
    let result = orchestrator.run().await;

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.no_color);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    if result.has_problems() {
        // Partial success - some devices could not be assessed
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
