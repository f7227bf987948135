//! Markdown rendering of a bookmark export.
//!
//! [`render`] is a pure function: the same posts and date always produce the
//! same document. The only ambient input, today's date, is passed in
//! explicitly (or through a [`Clock`] with [`render_with_clock`]).
//!
//! # Document Layout
//!
//! ```text
//! # X Bookmarks
//!
//! Exported on: 2025-05-06
//! Total bookmarks: 1
//!
//! ---
//!
//! ## Ann (@ann)
//! **Date:** May 14, 2024 at 09:30 AM
//!
//! hi
//!
//! - Likes: 5 | Retweets: 0 | Replies: 0
//! - [View tweet](https://x.com/ann/status/42)
//!
//! ---
//! ```

use crate::clock::Clock;
use crate::error::ConvertError;
use crate::models::Post;
use crate::utils::{blockquote, escape_markup, format_created_at};
use chrono::NaiveDate;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

const TITLE: &str = "# X Bookmarks";
const SEPARATOR: &str = "---";

/// Render posts into a Markdown document dated `today`.
///
/// Posts appear in input order. An empty slice still yields the header with
/// `Total bookmarks: 0`.
pub fn render(posts: &[Post], today: NaiveDate) -> String {
    let mut lines: Vec<String> = vec![
        TITLE.to_string(),
        String::new(),
        format!("Exported on: {}", today.format("%Y-%m-%d")),
        format!("Total bookmarks: {}", posts.len()),
        String::new(),
        SEPARATOR.to_string(),
        String::new(),
    ];

    for post in posts {
        push_post(&mut lines, post);
    }

    lines.join("\n")
}

/// Same as [`render`], taking today's date from `clock`.
pub fn render_with_clock(posts: &[Post], clock: &dyn Clock) -> String {
    render(posts, clock.today())
}

fn push_post(lines: &mut Vec<String>, post: &Post) {
    let likes = post.like_count.unwrap_or(0);
    let retweets = post.retweet_count.unwrap_or(0);
    let replies = post.reply_count.unwrap_or(0);

    lines.push(format!(
        "## {} (@{})",
        post.author_name(),
        post.author_username()
    ));
    lines.push(format!(
        "**Date:** {}",
        format_created_at(post.created_at.as_deref())
    ));
    lines.push(String::new());
    lines.push(escape_markup(post.body()));
    lines.push(String::new());
    lines.push(format!(
        "- Likes: {likes} | Retweets: {retweets} | Replies: {replies}"
    ));
    lines.push(format!("- [View tweet]({})", post.status_url()));

    // Quotes render one level deep and without a link of their own.
    if let Some(quoted) = post.quoted_tweet.as_deref() {
        lines.push(String::new());
        lines.push(format!(
            "> **Quoted: {} (@{})**",
            quoted.author_name(),
            quoted.author_username()
        ));
        lines.push(blockquote(&escape_markup(quoted.body())));
    }

    lines.push(String::new());
    lines.push(SEPARATOR.to_string());
    lines.push(String::new());
}

/// Write a rendered document to `path`, creating parent directories as needed.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_document(path: &Path, document: &str) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ConvertError::io(parent, e))?;
    }

    fs::write(path, document)
        .await
        .map_err(|e| ConvertError::io(path, e))?;
    info!(bytes = document.len(), "Wrote Markdown export");
    Ok(())
}
