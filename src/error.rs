//! Error types for the email counter

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the requested input. Fatal, raised before any scanning.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No input given: specify either a file or a directory")]
    NoInput,

    #[error("Conflicting inputs: specify either a file or a directory, not both")]
    ConflictingInputs,

    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Input file is not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Input directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
}

/// A single file could not be opened or read. The run carries on without it.
#[derive(Error, Debug)]
#[error("Failed to read {}: {source}", .path.display())]
pub struct ScanError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Failures while producing the CSV report. Fatal.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create report file {}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write CSV record")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush CSV report")]
    Flush(#[from] io::Error),
}

/// Anything that stops a run.
#[derive(Error, Debug)]
pub enum CounterError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

pub type Result<T, E = CounterError> = std::result::Result<T, E>;
