//! Plan a split, then write each chunk from a single parse of the input.
//!
//! ```bash
//! cargo run --example split_file -- statute.pdf chunks --max-pages 25
//! ```

use std::path::PathBuf;

use clap::Parser;
use leaves::{FixedWindows, SourceDocument, DEFAULT_MAX_PAGES_PER_CHUNK};

#[derive(Parser, Debug)]
struct Args {
    /// PDF to split
    input: PathBuf,
    /// Output directory
    output_dir: PathBuf,
    /// Maximum pages per chunk
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES_PER_CHUNK)]
    max_pages: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let source = SourceDocument::open(&args.input)?;
    let windows = FixedWindows::new(args.max_pages)?.windows(source.page_count());

    println!(
        "{}: {} pages, {} chunks",
        args.input.display(),
        source.page_count(),
        windows.len()
    );
    for window in &windows {
        println!("  {window} -> {}", window.file_name(source.stem()));
    }

    std::fs::create_dir_all(&args.output_dir)?;
    for window in &windows {
        let path = source.write_window(window, &args.output_dir)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
