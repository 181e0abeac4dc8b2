//! find-sizes - prints `path\twidth\theight` for every spine image.
//!
//! Run it from a sibling directory of `res/`.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use find_sizes::{DEFAULT_PATTERN, images_metadata, logging, render_report};

#[derive(Parser, Debug)]
#[command(name = "find-sizes")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log each file to stderr as it is read
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let lines = images_metadata(DEFAULT_PATTERN)
        .with_context(|| format!("Failed to expand {}", DEFAULT_PATTERN))?;
    let report = render_report(lines)
        .inspect_err(|e| {
            if let Some(path) = e.path() {
                tracing::debug!("Aborted at {}, nothing written to stdout", path.display());
            }
        })
        .context("Failed to read image sizes")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write to stdout")?;

    Ok(())
}
