//! # X Bookmarks to Markdown
//!
//! Converts an exported list of X/Twitter bookmarks (a JSON array of post
//! records) into a single Markdown document.
//!
//! ## Usage
//!
//! ```sh
//! x_bookmarks_md [input.json] [output.md]
//! ```
//!
//! ## Pipeline
//!
//! 1. **Loading**: Read the export and check that it is a JSON array
//! 2. **Rendering**: Format every post into a fixed Markdown template
//! 3. **Output**: Write the document, then print a one-line confirmation
//!
//! Any failure exits with status 1 before the output file is written.
//! Logs go to stderr and are filtered with `RUST_LOG` (default `info`).

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod clock;
mod error;
mod input;
mod models;
mod outputs;
mod utils;

use cli::Cli;
use clock::{Clock, SystemClock};
use error::ConvertError;
use outputs::markdown;

/// What a successful conversion produced.
#[derive(Debug)]
struct Converted {
    count: usize,
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(input = %args.input.display(), output = ?args.output, "Parsed CLI arguments");

    match run(&args, &SystemClock).await {
        Ok(converted) => {
            println!(
                "Successfully converted {} bookmarks to {}",
                converted.count,
                converted.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "Conversion failed");
            eprintln!("Error: {e}");
            if matches!(e, ConvertError::MissingInput { .. }) {
                eprintln!("{}", cli::usage());
            }
            ExitCode::from(1)
        }
    }
}

/// Load, render and write. Nothing is written unless loading succeeds.
async fn run(args: &Cli, clock: &dyn Clock) -> Result<Converted, ConvertError> {
    let output = args.output_path(clock);
    info!(input = %args.input.display(), output = %output.display(), "Converting bookmarks");

    let posts = input::load_bookmarks(&args.input).await?;
    let document = markdown::render_with_clock(&posts, clock);
    markdown::write_document(&output, &document).await?;

    Ok(Converted {
        count: posts.len(),
        output,
    })
}
