//! Error types for loading bookmarks and writing the Markdown export.
//!
//! Structural problems with the input (missing file, invalid JSON, a top level
//! that is not an array) are errors. Missing fields inside a record are not;
//! those are defaulted by the formatter.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConvertError {
    /// The input path does not exist.
    MissingInput { path: PathBuf },
    /// The input file is not valid JSON.
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Valid JSON, but the top level is not an array.
    NotAnArray { path: PathBuf, found: &'static str },
    /// An array element is not a JSON object.
    InvalidRecord { index: usize, reason: String },
    /// Reading the input or writing the output failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::InvalidJson { source, .. } => Some(source),
            ConvertError::Io { source, .. } => Some(source),
            ConvertError::MissingInput { .. }
            | ConvertError::NotAnArray { .. }
            | ConvertError::InvalidRecord { .. } => None,
        }
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::MissingInput { path } => {
                write!(f, "Input file \"{}\" not found", path.display())
            }
            ConvertError::InvalidJson { path, source } => {
                write!(f, "Could not parse \"{}\" as JSON: {source}", path.display())
            }
            ConvertError::NotAnArray { path, found } => write!(
                f,
                "JSON file \"{}\" should contain an array of bookmarks, found {found}",
                path.display()
            ),
            ConvertError::InvalidRecord { index, reason } => {
                write!(f, "Bookmark at index {index} is not a post record: {reason}")
            }
            ConvertError::Io { path, source } => {
                write!(f, "I/O error on \"{}\": {source}", path.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_missing_input_message() {
        let err = ConvertError::MissingInput {
            path: PathBuf::from("bookmarks.json"),
        };
        assert_eq!(err.to_string(), "Input file \"bookmarks.json\" not found");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_not_an_array_message_names_kind() {
        let err = ConvertError::NotAnArray {
            path: PathBuf::from("in.json"),
            found: "an object",
        };
        assert!(err.to_string().contains("should contain an array of bookmarks"));
        assert!(err.to_string().ends_with("found an object"));
    }

    #[test]
    fn test_invalid_record_message_names_index() {
        let err = ConvertError::InvalidRecord {
            index: 3,
            reason: "expected an object, found null".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Bookmark at index 3 is not a post record: expected an object, found null"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = ConvertError::io(
            "out.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("out.md"));
        assert!(err.source().is_some());
    }
}
