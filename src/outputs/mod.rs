//! Output generation.
//!
//! # Submodules
//!
//! - [`markdown`]: Renders posts to a Markdown document and writes it to disk
//!
//! # Output Structure
//!
//! ```text
//! bookmarks-2025-05-06.md   # default name, dated by the injected clock
//! ```

pub mod markdown;
