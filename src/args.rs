use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "email-counter",
    about = "Count email addresses found in a file or directory tree and write a CSV report",
    version,
    long_about = None
)]
pub struct Args {
    /// Single file to scan
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Directory to scan recursively (every file, no extension filter)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Directory the CSV report is written to
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_selection() {
        let args = Args::parse_from(["email-counter", "--file", "inbox.txt"]);
        assert_eq!(args.file, Some(PathBuf::from("inbox.txt")));
        assert!(args.directory.is_none());
        assert_eq!(args.output_dir, PathBuf::from("output"));
        assert!(!args.verbose);
    }

    #[test]
    fn parses_short_flags() {
        let args = Args::parse_from(["email-counter", "-d", "mail", "-o", "reports", "-v"]);
        assert_eq!(args.directory, Some(PathBuf::from("mail")));
        assert_eq!(args.output_dir, PathBuf::from("reports"));
        assert!(args.verbose);
    }

    #[test]
    fn accepts_both_inputs_for_later_validation() {
        let args = Args::parse_from(["email-counter", "-f", "a.txt", "-d", "mail"]);
        assert!(args.file.is_some() && args.directory.is_some());
    }
}
