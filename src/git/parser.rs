//! git output parser
//!
//! Parses plain-text output from git commands into structured data.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::WhitespaceIssue;

/// Regex for a `git log --check` problem line
/// Format: `<path>:<line>: <message>.`
/// Example: `src/main.rs:12: trailing whitespace.`
///
/// The path is greedy, so paths containing `:` survive; git's messages
/// never contain `:<digits>: `. Log headers never carry `:<digits>: `;
/// message lines are indented and added lines start with `+`, so both are
/// excluded by the first character.
static CHECK_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^+\s].*):(\d+): (.+?)\.?$").expect("Invalid check line regex")
});

/// Split newline-separated commit hashes
///
/// Blank lines are dropped, so empty output yields no hashes rather than
/// one empty hash.
pub fn parse_hash_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract the problems reported by `git log --check`
pub fn parse_check_output(output: &str) -> Vec<WhitespaceIssue> {
    output
        .lines()
        .filter_map(|line| {
            let caps = CHECK_LINE_REGEX.captures(line.trim_end())?;
            let line_number = caps[2].parse().ok()?;
            Some(WhitespaceIssue {
                path: caps[1].to_string(),
                line: line_number,
                message: caps[3].to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hash_list() {
        let hashes = parse_hash_list("aaa\nbbb\nccc");
        assert_eq!(hashes, vec!["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn test_parse_hash_list_trims_surrounding_whitespace() {
        let hashes = parse_hash_list("\n  aaa\r\nbbb  \n\n");
        assert_eq!(hashes, vec!["aaa", "bbb"]);
    }

    #[test]
    fn test_parse_hash_list_empty_output() {
        assert!(parse_hash_list("").is_empty());
        assert!(parse_hash_list("\n \n").is_empty());
    }

    #[test]
    fn test_parse_check_output() {
        let output = "\
commit 3f2a9c1d0e8b7a6f5e4d3c2b1a0f9e8d7c6b5a4f
Author: Jane Doe <jane@example.com>
Date:   Mon Jan 29 15:30:00 2024 +0900

    Add greeting

greeting.txt:1: trailing whitespace.
+hello
src/lib.rs:12: space before tab in indent.
+ \tlet x = 1;
";
        let issues = parse_check_output(output);

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].path, "greeting.txt");
        assert_eq!(issues[0].line, 1);
        assert_eq!(issues[0].message, "trailing whitespace");
        assert_eq!(issues[1].path, "src/lib.rs");
        assert_eq!(issues[1].line, 12);
        assert_eq!(issues[1].message, "space before tab in indent");
    }

    #[test]
    fn test_parse_check_output_ignores_added_and_message_lines() {
        let output = "+a.txt:3: trailing whitespace.\n    b.txt:4: trailing whitespace.\n";
        assert!(parse_check_output(output).is_empty());
    }

    #[test]
    fn test_parse_check_output_path_with_colon() {
        let issues = parse_check_output("docs/a:b.md:3: trailing whitespace.\n+x \n");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "docs/a:b.md");
        assert_eq!(issues[0].line, 3);
        assert_eq!(issues[0].message, "trailing whitespace");
    }

    #[test]
    fn test_parse_check_output_path_with_digit_segment() {
        let issues = parse_check_output("logs/12:34/x.txt:7: new blank line at EOF.\n");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "logs/12:34/x.txt");
        assert_eq!(issues[0].line, 7);
        assert_eq!(issues[0].message, "new blank line at EOF");
    }

    #[test]
    fn test_parse_check_output_empty() {
        assert!(parse_check_output("").is_empty());
    }
}
