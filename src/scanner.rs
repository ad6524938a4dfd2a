use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::ScanError;
use crate::events::{Event, EventSink};
use crate::matcher::find_emails;
use crate::tally::EmailTally;

/// Feeds every line of `reader` through the matcher into `tally`.
///
/// Lines must be valid UTF-8. Reading stops at the first line with an invalid
/// byte, so a binary file loses every match after it. On any read error,
/// matches from earlier lines have already been recorded and stay recorded.
pub fn scan_reader<R: BufRead>(
    reader: R,
    path: &Path,
    tally: &mut EmailTally,
    sink: &mut dyn EventSink,
) -> io::Result<usize> {
    let mut matches = 0;

    for line in reader.lines() {
        let line = line?;
        for address in find_emails(&line) {
            matches += 1;
            if tally.record(address) {
                sink.emit(&Event::AddressDiscovered { path, address });
            }
        }
    }

    Ok(matches)
}

/// Scans one file, reporting success or failure to `sink`.
///
/// Returns the number of matches recorded. A failure covers the whole file
/// and is meant to be skipped by the caller.
pub fn scan_file(
    path: &Path,
    tally: &mut EmailTally,
    sink: &mut dyn EventSink,
) -> Result<usize, ScanError> {
    let result = File::open(path)
        .and_then(|file| scan_reader(BufReader::new(file), path, tally, sink))
        .map_err(|source| ScanError {
            path: path.to_path_buf(),
            source,
        });

    match &result {
        Ok(matches) => sink.emit(&Event::FileScanned {
            path,
            matches: *matches,
        }),
        Err(error) => sink.emit(&Event::FileFailed { error }),
    }

    result
}
