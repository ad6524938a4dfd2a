pub mod args;
pub mod counter;
pub mod error;
pub mod events;
pub mod inputs;
pub mod matcher;
pub mod report;
pub mod scanner;
pub mod tally;
pub mod utils;

pub use args::Args;
pub use counter::{count_emails, CounterOptions, RunSummary};
pub use error::{ConfigError, CounterError, ReportError, ScanError};
pub use events::{Event, EventSink, MemorySink, TracingSink};
pub use inputs::{FileSet, InputSelection};
pub use matcher::find_emails;
pub use tally::{normalize_address, EmailTally};
