use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ReportError;
use crate::tally::EmailTally;

pub const CSV_HEADER: [&str; 2] = ["EmailAddress", "Count"];
pub const OUTPUT_FILE_SUFFIX: &str = "_EmailCounter_Output.csv";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CsvRecord<'a> {
    #[serde(rename = "EmailAddress")]
    pub email_address: &'a str,
    #[serde(rename = "Count")]
    pub count: u64,
}

/// Rows ascending by count. Equal counts keep first-seen order.
pub fn sorted_records(tally: &EmailTally) -> Vec<CsvRecord<'_>> {
    let mut records: Vec<CsvRecord<'_>> = tally
        .snapshot()
        .iter()
        .map(|entry| CsvRecord {
            email_address: &entry.address,
            count: entry.count,
        })
        .collect();
    records.sort_by_key(|record| record.count);
    records
}

/// Writes the header and one row per address. The header is written even
/// when the tally is empty.
pub fn write_csv<W: Write>(writer: W, tally: &EmailTally) -> Result<usize, ReportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    let records = sorted_records(tally);
    for record in &records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(records.len())
}

/// `yyyyMMddHHmmss_EmailCounter_Output.csv` for the given UTC instant.
pub fn output_file_name(timestamp: DateTime<Utc>) -> String {
    format!("{}{}", timestamp.format("%Y%m%d%H%M%S"), OUTPUT_FILE_SUFFIX)
}

pub fn prepare_output_dir(output_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(output_dir).map_err(|source| ReportError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })
}

/// Creates `output_dir` if needed and writes the report into it,
/// replacing any file with the same name.
pub fn write_report_file(
    output_dir: &Path,
    file_name: &str,
    tally: &EmailTally,
) -> Result<(PathBuf, usize), ReportError> {
    prepare_output_dir(output_dir)?;

    let path = output_dir.join(file_name);
    let file = File::create(&path).map_err(|source| ReportError::CreateFile {
        path: path.clone(),
        source,
    })?;

    let rows = write_csv(file, tally)?;
    Ok((path, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn render(tally: &EmailTally) -> String {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, tally).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn empty_tally_still_writes_header() {
        assert_eq!(render(&EmailTally::new()), "EmailAddress,Count\n");
    }

    #[test]
    fn rows_are_ascending_by_count() {
        let mut tally = EmailTally::new();
        for address in ["a@b.com", "A@B.COM", "x@y.org"] {
            tally.record(address);
        }

        assert_eq!(render(&tally), "EmailAddress,Count\nx@y.org,1\na@b.com,2\n");
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let mut tally = EmailTally::new();
        for address in ["z@z.io", "m@m.io", "big@big.io", "big@big.io", "a@a.io"] {
            tally.record(address);
        }

        let order: Vec<&str> = sorted_records(&tally)
            .iter()
            .map(|r| r.email_address)
            .collect();
        assert_eq!(order, vec!["z@z.io", "m@m.io", "a@a.io", "big@big.io"]);
    }

    #[test]
    fn fields_needing_quotes_are_quoted() {
        let mut tally = EmailTally::new();
        tally.record("odd,\"name\"@x.io");

        assert_eq!(
            render(&tally),
            "EmailAddress,Count\n\"odd,\"\"name\"\"@x.io\",1\n"
        );
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let mut tally = EmailTally::new();
        for address in ["q@r.st", "u@v.wx", "q@r.st", "y@z.ab"] {
            tally.record(address);
        }
        assert_eq!(render(&tally), render(&tally));
    }

    #[test]
    fn file_name_embeds_utc_timestamp() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
        assert_eq!(
            output_file_name(timestamp),
            "20240307090502_EmailCounter_Output.csv"
        );
    }

    #[test]
    fn output_dir_that_is_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        fs::write(&blocker, "").unwrap();

        let error = prepare_output_dir(&blocker).unwrap_err();
        assert!(matches!(error, ReportError::CreateDir { .. }));
    }

    #[test]
    fn report_file_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("reports/nested");
        let mut tally = EmailTally::new();
        tally.record("hi@test.io");

        let (first, rows) = write_report_file(&output_dir, "report.csv", &tally).unwrap();
        assert_eq!(rows, 1);
        assert_eq!(first, output_dir.join("report.csv"));

        tally.record("second@test.io");
        let (second, rows) = write_report_file(&output_dir, "report.csv", &tally).unwrap();
        assert_eq!(first, second);
        assert_eq!(rows, 2);
        assert_eq!(
            fs::read_to_string(second).unwrap(),
            "EmailAddress,Count\nhi@test.io,1\nsecond@test.io,1\n"
        );
    }
}
