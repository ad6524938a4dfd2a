use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use email_counter::counter::{count_emails, print_run_summary, CounterOptions};
use email_counter::utils::setup_logging;
use email_counter::{Args, TracingSink};

fn run(args: &Args) -> Result<()> {
    let options = CounterOptions::from_args(args).context("Invalid input selection")?;
    let summary = count_emails(&options, &mut TracingSink).context("Email count failed")?;

    info!(
        action = "complete",
        component = "counter",
        unique_addresses = summary.unique_addresses,
        files_processed = summary.files_processed,
        files_failed = summary.files_failed,
        duration_ms = summary.elapsed.as_millis(),
        "Run completed"
    );
    print_run_summary(&summary);
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!(error = %format!("{:#}", e), "Aborting");
        std::process::exit(1);
    }
}
