//! Data models for exported bookmarks.
//!
//! - [`Post`]: one bookmarked post, as found in the exported JSON array
//! - [`Author`]: display name and handle of a post's author
//!
//! Field names on the wire are camelCase (`createdAt`, `likeCount`,
//! `quotedTweet`, ...). Every field is optional: a record that only carries an
//! `id` still deserializes, and the formatter fills in placeholders.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single bookmarked post.
///
/// `quoted_tweet` reuses the same type. Inputs may nest quotes arbitrarily
/// deep, but only the first level is ever rendered.
///
/// Fields are read leniently: a value of the wrong type reads as absent
/// instead of rejecting the record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post identifier. Exports carry it either as a string or as a number.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string")]
    pub text: Option<String>,
    /// Raw timestamp, parsed lazily at render time. Epoch milliseconds are
    /// stored as RFC 3339.
    #[serde(default, deserialize_with = "deserialize_created_at")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_object")]
    pub author: Option<Author>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub like_count: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub retweet_count: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub reply_count: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_object")]
    pub quoted_tweet: Option<Box<Post>>,
}

/// The author of a post.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Author {
    /// Display name.
    #[serde(default, deserialize_with = "deserialize_string")]
    pub name: Option<String>,
    /// Handle, without the leading `@`.
    #[serde(default, deserialize_with = "deserialize_string")]
    pub username: Option<String>,
}

impl Post {
    /// Author display name, or `"Unknown"` when absent or empty.
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown")
    }

    /// Author handle, or `"unknown"` when absent or empty.
    pub fn author_username(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|a| a.username.as_deref())
            .filter(|username| !username.is_empty())
            .unwrap_or("unknown")
    }

    /// Body text; absent text reads as empty.
    pub fn body(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Canonical link to the post on x.com.
    ///
    /// A missing id leaves the last path segment empty.
    pub fn status_url(&self) -> String {
        format!(
            "https://x.com/{}/status/{}",
            self.author_username(),
            self.id.as_deref().unwrap_or("")
        )
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn deserialize_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn deserialize_created_at<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.to_rfc3339()),
        _ => None,
    })
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    })
}

/// Nested records only count when they are JSON objects.
fn deserialize_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserialization_full() {
        let json = r#"{
            "id": "1790000000000000000",
            "text": "hello <world>",
            "createdAt": "2024-05-14T09:30:00.000Z",
            "author": { "name": "Ann", "username": "ann" },
            "likeCount": 5,
            "retweetCount": 2,
            "replyCount": 0,
            "quotedTweet": {
                "id": "1",
                "text": "quoted",
                "author": { "name": "Bob", "username": "bob" }
            }
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id.as_deref(), Some("1790000000000000000"));
        assert_eq!(post.created_at.as_deref(), Some("2024-05-14T09:30:00.000Z"));
        assert_eq!(post.like_count, Some(5));
        assert_eq!(post.reply_count, Some(0));
        let quoted = post.quoted_tweet.unwrap();
        assert_eq!(quoted.author_name(), "Bob");
        assert!(quoted.quoted_tweet.is_none());
    }

    #[test]
    fn test_post_deserialization_empty_object() {
        let post: Post = serde_json::from_str("{}").unwrap();
        assert_eq!(post, Post::default());
        assert_eq!(post.author_name(), "Unknown");
        assert_eq!(post.author_username(), "unknown");
        assert_eq!(post.body(), "");
    }

    #[test]
    fn test_numeric_id_is_kept_verbatim() {
        let post: Post = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(post.id.as_deref(), Some("42"));
    }

    #[test]
    fn test_null_fields_read_as_absent() {
        let post: Post = serde_json::from_str(
            r#"{"id": null, "text": null, "author": null, "likeCount": null, "quotedTweet": null}"#,
        )
        .unwrap();
        assert_eq!(post, Post::default());
    }

    #[test]
    fn test_object_id_reads_as_absent() {
        let post: Post = serde_json::from_str(r#"{"id": {"x": 1}}"#).unwrap();
        assert!(post.id.is_none());
    }

    #[test]
    fn test_epoch_millis_created_at() {
        let post: Post = serde_json::from_str(r#"{"createdAt": 1700000000000}"#).unwrap();
        assert_eq!(post.created_at.as_deref(), Some("2023-11-14T22:13:20+00:00"));
    }

    #[test]
    fn test_wrong_typed_fields_read_as_absent() {
        let post: Post = serde_json::from_str(
            r#"{
                "text": 5,
                "createdAt": {"$date": "x"},
                "author": "x",
                "likeCount": "7",
                "retweetCount": 1.5,
                "replyCount": 18446744073709551615,
                "quotedTweet": ["a", "b"]
            }"#,
        )
        .unwrap();
        assert_eq!(post, Post::default());
    }

    #[test]
    fn test_integral_float_count() {
        let post: Post = serde_json::from_str(r#"{"likeCount": 5.0}"#).unwrap();
        assert_eq!(post.like_count, Some(5));
    }

    #[test]
    fn test_author_with_wrong_typed_name() {
        let post: Post =
            serde_json::from_str(r#"{"author": {"name": 3, "username": "ann"}}"#).unwrap();
        assert_eq!(post.author_name(), "Unknown");
        assert_eq!(post.author_username(), "ann");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let post: Post =
            serde_json::from_str(r#"{"id": "7", "bookmarkCount": 3, "media": []}"#).unwrap();
        assert_eq!(post.id.as_deref(), Some("7"));
    }

    #[test]
    fn test_empty_author_fields_fall_back() {
        let post: Post =
            serde_json::from_str(r#"{"author": {"name": "", "username": ""}}"#).unwrap();
        assert_eq!(post.author_name(), "Unknown");
        assert_eq!(post.author_username(), "unknown");
    }

    #[test]
    fn test_status_url() {
        let post: Post =
            serde_json::from_str(r#"{"id": "42", "author": {"name": "Ann", "username": "ann"}}"#)
                .unwrap();
        assert_eq!(post.status_url(), "https://x.com/ann/status/42");
    }

    #[test]
    fn test_status_url_without_id_or_handle() {
        assert_eq!(Post::default().status_url(), "https://x.com/unknown/status/");
    }
}
