//! `leaves` command line: split a PDF into chunk files.
//!
//! ```bash
//! leaves --input statute.pdf --output-dir chunks --max-pages 50
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use leaves::{SplitConfig, DEFAULT_MAX_PAGES_PER_CHUNK};

/// Split a large PDF into smaller PDFs of at most N pages each.
#[derive(Parser, Debug)]
#[command(name = "leaves", version, about)]
struct Cli {
    /// PDF document to split
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Directory for the chunk files (created if missing)
    #[arg(short, long, value_name = "DIR")]
    output_dir: PathBuf,

    /// Maximum pages per chunk
    #[arg(short, long, value_name = "NUM", default_value_t = DEFAULT_MAX_PAGES_PER_CHUNK)]
    max_pages: usize,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let fallback = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = SplitConfig::new(&cli.input, &cli.output_dir).with_max_pages(cli.max_pages);

    match leaves::split_with(&config) {
        Ok(chunks) => {
            println!("Total chunks created: {}", chunks.len());
            for (i, path) in chunks.iter().enumerate() {
                let name = path.file_name().unwrap_or(path.as_os_str());
                println!("  {}. {}", i + 1, name.to_string_lossy());
            }
            println!("All chunks saved to: {}", config.output_dir.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
