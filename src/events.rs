//! Observability for a counting run.
//!
//! Components report progress through an [`EventSink`] handed to them by the
//! caller instead of touching global logging state. [`TracingSink`] forwards
//! events to `tracing`; [`MemorySink`] keeps them for inspection.

use std::fmt;
use std::path::Path;
use tracing::{debug, error, info, warn, Level};

use crate::error::ScanError;
use crate::utils::pluralize;

#[derive(Debug)]
pub enum Event<'a> {
    InputMissing {
        kind: &'static str,
        path: &'a Path,
    },
    EntrySkipped {
        path: Option<&'a Path>,
        reason: String,
    },
    FilesResolved {
        root: &'a Path,
        file_count: usize,
    },
    FileScanned {
        path: &'a Path,
        matches: usize,
    },
    AddressDiscovered {
        path: &'a Path,
        address: &'a str,
    },
    FileFailed {
        error: &'a ScanError,
    },
    ReportWritten {
        path: &'a Path,
        rows: usize,
    },
}

impl Event<'_> {
    pub fn level(&self) -> Level {
        match self {
            Event::InputMissing { .. } | Event::EntrySkipped { .. } => Level::WARN,
            Event::FilesResolved { .. } | Event::FileScanned { .. } | Event::ReportWritten { .. } => {
                Level::INFO
            }
            Event::AddressDiscovered { .. } => Level::DEBUG,
            Event::FileFailed { .. } => Level::ERROR,
        }
    }
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::InputMissing { kind, path } => {
                write!(f, "No usable input {} at {}", kind, path.display())
            }
            Event::EntrySkipped { path: Some(path), reason } => {
                write!(f, "Skipping {}: {}", path.display(), reason)
            }
            Event::EntrySkipped { path: None, reason } => write!(f, "Skipping entry: {}", reason),
            Event::FilesResolved { root, file_count } => {
                write!(
                    f,
                    "Resolved {} {} under {}",
                    file_count,
                    pluralize(*file_count, "file", "files"),
                    root.display()
                )
            }
            Event::FileScanned { path, matches } => {
                write!(f, "Processed {} ({} matches)", path.display(), matches)
            }
            Event::AddressDiscovered { path, address } => {
                write!(f, "New address {} in {}", address, path.display())
            }
            Event::FileFailed { error } => write!(f, "{}", error),
            Event::ReportWritten { path, rows } => {
                write!(f, "Wrote {} rows to {}", rows, path.display())
            }
        }
    }
}

pub trait EventSink {
    fn emit(&mut self, event: &Event<'_>);
}

/// Sends events to the installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: &Event<'_>) {
        match *event {
            Event::InputMissing { kind, path } => {
                warn!(action = "resolve", component = "inputs", kind, path = ?path, "Input missing or unusable")
            }
            Event::EntrySkipped { path, ref reason } => {
                warn!(action = "walk", component = "inputs", path = ?path, reason = %reason, "Skipping unreadable entry")
            }
            Event::FilesResolved { root, file_count } => {
                info!(action = "resolve", component = "inputs", root = ?root, file_count, "Resolved input files")
            }
            Event::FileScanned { path, matches } => {
                info!(action = "scan", component = "scanner", file_path = ?path, matches, "Processed file")
            }
            Event::AddressDiscovered { path, address } => {
                debug!(action = "discover", component = "tally", file_path = ?path, address, "New email address")
            }
            Event::FileFailed { error } => {
                error!(action = "scan", component = "scanner", file_path = ?error.path, error = %error.source, "Failed to process file")
            }
            Event::ReportWritten { path, rows } => {
                info!(action = "write", component = "report", output_path = ?path, rows, "Report written")
            }
        }
    }
}

/// Keeps every event as `(level, message)`.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub events: Vec<(Level, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages_at(&self, level: Level) -> Vec<&str> {
        self.events
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.as_str())
            .collect()
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, event: &Event<'_>) {
        self.events.push((event.level(), event.to_string()));
    }
}
