use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Shape of an email-like token. Purely textual, no deliverability checks.
pub const EMAIL_PATTERN: &str = r"\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(EMAIL_PATTERN)
        .case_insensitive(true)
        .build()
        .expect("email pattern is a valid regex")
});

/// Yields every email-like substring of `line`, left to right and
/// non-overlapping. Calling it again on the same line starts over.
pub fn find_emails(line: &str) -> impl Iterator<Item = &str> + '_ {
    EMAIL_REGEX.find_iter(line).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(line: &str) -> Vec<&str> {
        find_emails(line).collect()
    }

    #[test]
    fn finds_single_address() {
        assert_eq!(collect("contact: a@b.com"), vec!["a@b.com"]);
    }

    #[test]
    fn matches_case_insensitively_and_keeps_original_text() {
        assert_eq!(collect("A@B.COM x@y.org"), vec!["A@B.COM", "x@y.org"]);
    }

    #[test]
    fn finds_all_addresses_separated_by_punctuation() {
        assert_eq!(
            collect("a@b.co, c@d.co; e@f.co"),
            vec!["a@b.co", "c@d.co", "e@f.co"]
        );
    }

    #[test]
    fn lines_without_addresses_yield_nothing() {
        assert!(collect("").is_empty());
        assert!(collect("no addresses here").is_empty());
        assert!(collect("root@localhost").is_empty());
        assert!(collect("user@host.c").is_empty());
    }

    #[test]
    fn trailing_punctuation_is_not_part_of_match() {
        assert_eq!(collect("mail bob@example.com."), vec!["bob@example.com"]);
        assert_eq!(collect("<jane.doe+tag@mail.example.io>"), vec!["jane.doe+tag@mail.example.io"]);
    }

    #[test]
    fn consumed_characters_are_not_matched_again() {
        assert_eq!(collect("a@b.com@c.org"), vec!["a@b.com"]);
    }

    #[test]
    fn sequence_is_restartable() {
        let line = "one@two.net three@four.net";
        let first: Vec<_> = find_emails(line).collect();
        let second: Vec<_> = find_emails(line).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
