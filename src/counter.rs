use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::error::{ConfigError, Result};
use crate::events::{Event, EventSink};
use crate::inputs::{resolve_file_set, InputSelection};
use crate::report;
use crate::scanner::scan_file;
use crate::tally::EmailTally;
use crate::utils::{format_number, pluralize};
use crate::Args;

#[derive(Debug, Clone)]
pub struct CounterOptions {
    pub selection: InputSelection,
    pub output_dir: PathBuf,
    /// Instant the report file name is derived from.
    pub started_at: DateTime<Utc>,
}

impl CounterOptions {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        Ok(Self {
            selection: InputSelection::from_options(args.file.clone(), args.directory.clone())?,
            output_dir: args.output_dir.clone(),
            started_at: Utc::now(),
        })
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub unique_addresses: usize,
    pub files_processed: usize,
    pub files_failed: usize,
    pub output_path: PathBuf,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn summary_line(&self) -> String {
        format!(
            "Found {} unique email {} in {} {}",
            format_number(self.unique_addresses),
            pluralize(self.unique_addresses, "address", "addresses"),
            format_number(self.files_processed),
            pluralize(self.files_processed, "file", "files"),
        )
    }
}

/// Runs the whole pipeline: resolve inputs, scan every file into one tally,
/// write the report.
///
/// Configuration errors abort before anything is written. A file that cannot
/// be read is reported to `sink` and skipped.
pub fn count_emails(options: &CounterOptions, sink: &mut dyn EventSink) -> Result<RunSummary> {
    let start_time = Instant::now();

    let files = resolve_file_set(&options.selection, sink)?;

    report::prepare_output_dir(&options.output_dir)?;
    let file_name = report::output_file_name(options.started_at);

    let mut tally = EmailTally::new();
    let files_failed = scan_files(files.paths(), &mut tally, sink);

    let (output_path, rows) = report::write_report_file(&options.output_dir, &file_name, &tally)?;
    sink.emit(&Event::ReportWritten {
        path: &output_path,
        rows,
    });

    Ok(RunSummary {
        unique_addresses: tally.len(),
        files_processed: files.len(),
        files_failed,
        output_path,
        elapsed: start_time.elapsed(),
    })
}

/// Scans each path into `tally` in order. Returns how many files failed;
/// a failure never stops the remaining files.
pub fn scan_files(paths: &[PathBuf], tally: &mut EmailTally, sink: &mut dyn EventSink) -> usize {
    let mut files_failed = 0;
    for path in paths {
        if scan_file(path, tally, sink).is_err() {
            files_failed += 1;
        }
    }
    files_failed
}

pub fn print_run_summary(summary: &RunSummary) {
    println!("\n--- Email Counter ---");
    println!("{}", summary.summary_line());
    if summary.files_failed > 0 {
        println!(
            "Skipped {} unreadable {}",
            format_number(summary.files_failed),
            pluralize(summary.files_failed, "file", "files")
        );
    }
    println!("Report: {}", summary.output_path.display());
}
