//! Command-line interface definitions.
//!
//! Both arguments are positional and optional, so a bare invocation converts
//! `bookmarks.json` in the current directory into `bookmarks-<today>.md`.

use crate::clock::Clock;
use clap::Parser;
use std::path::PathBuf;

/// Input file used when none is given.
pub const DEFAULT_INPUT: &str = "bookmarks.json";

/// Convert exported X bookmarks (a JSON array of posts) to Markdown.
///
/// # Examples
///
/// ```sh
/// # Read ./bookmarks.json, write ./bookmarks-YYYY-MM-DD.md
/// x_bookmarks_md
///
/// # Explicit paths
/// x_bookmarks_md export/bookmarks.json notes/bookmarks.md
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the bookmarks JSON file
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Path of the Markdown file to write [default: bookmarks-<today>.md]
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// The output path, falling back to a name dated by `clock`.
    pub fn output_path(&self, clock: &dyn Clock) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(clock))
    }
}

/// `bookmarks-YYYY-MM-DD.md` for the clock's current date.
pub fn default_output_path(clock: &dyn Clock) -> PathBuf {
    PathBuf::from(format!("bookmarks-{}.md", clock.today().format("%Y-%m-%d")))
}

/// One-line usage hint printed alongside fatal input errors.
pub fn usage() -> String {
    format!("Usage: {} [input.json] [output.md]", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2025, 5, 6).unwrap())
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["x_bookmarks_md"]);

        assert_eq!(cli.input, PathBuf::from("bookmarks.json"));
        assert!(cli.output.is_none());
        assert_eq!(
            cli.output_path(&clock()),
            PathBuf::from("bookmarks-2025-05-06.md")
        );
    }

    #[test]
    fn test_cli_input_only() {
        let cli = Cli::parse_from(["x_bookmarks_md", "/tmp/export.json"]);

        assert_eq!(cli.input, PathBuf::from("/tmp/export.json"));
        assert_eq!(
            cli.output_path(&clock()),
            PathBuf::from("bookmarks-2025-05-06.md")
        );
    }

    #[test]
    fn test_cli_input_and_output() {
        let cli = Cli::parse_from(["x_bookmarks_md", "in.json", "out/notes.md"]);

        assert_eq!(cli.input, PathBuf::from("in.json"));
        assert_eq!(cli.output_path(&clock()), PathBuf::from("out/notes.md"));
    }

    #[test]
    fn test_cli_rejects_extra_arguments() {
        let result = Cli::try_parse_from(["x_bookmarks_md", "a.json", "b.md", "c"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_usage_mentions_both_arguments() {
        assert!(usage().contains("[input.json] [output.md]"));
    }
}
