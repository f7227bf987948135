//! Loading exported bookmarks from disk.
//!
//! The top-level shape is checked strictly: the file must exist, parse as
//! JSON, and hold an array. Inside the array each element only has to be
//! a JSON object; missing or wrong-typed fields read as absent and are left
//! for the formatter to default.

use crate::error::ConvertError;
use crate::models::Post;
use serde_json::Value;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Read and validate a bookmark export.
///
/// # Errors
///
/// - [`ConvertError::MissingInput`] if `path` does not exist
/// - [`ConvertError::Io`] if the file cannot be read
/// - [`ConvertError::InvalidJson`] if the content is not JSON
/// - [`ConvertError::NotAnArray`] if the top level is not an array
/// - [`ConvertError::InvalidRecord`] if an element is not a JSON object
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_bookmarks(path: &Path) -> Result<Vec<Post>, ConvertError> {
    let exists = fs::try_exists(path)
        .await
        .map_err(|e| ConvertError::io(path, e))?;
    if !exists {
        return Err(ConvertError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| ConvertError::io(path, e))?;
    debug!(bytes = content.len(), "Read bookmark export");

    let posts = parse_bookmarks(&content, path)?;
    info!(count = posts.len(), "Loaded bookmarks");
    Ok(posts)
}

/// Parse the text of a bookmark export. `path` is only used for error messages.
pub fn parse_bookmarks(content: &str, path: &Path) -> Result<Vec<Post>, ConvertError> {
    let value: Value = serde_json::from_str(content).map_err(|source| ConvertError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ConvertError::NotAnArray {
                path: path.to_path_buf(),
                found: json_kind(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(_) => {
                serde_json::from_value::<Post>(item).map_err(|e| ConvertError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                })
            }
            other => Err(ConvertError::InvalidRecord {
                index,
                reason: format!("expected an object, found {}", json_kind(&other)),
            }),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
