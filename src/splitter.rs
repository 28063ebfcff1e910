//! The end-to-end split: load, partition, write.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{Error, Result, SourceDocument, SplitConfig};

/// Split `input_path` into chunks of at most `max_pages_per_chunk` pages.
///
/// Shorthand for [`split_with`] on a [`SplitConfig`].
///
/// # Errors
///
/// See [`split_with`].
pub fn split(
    input_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    max_pages_per_chunk: usize,
) -> Result<Vec<PathBuf>> {
    split_with(&SplitConfig::new(input_path, output_dir).with_max_pages(max_pages_per_chunk))
}

/// Split the configured document and return the chunk paths in order.
///
/// The chunk size is checked before anything touches the filesystem, and the
/// input is parsed before the output directory is created. A document with
/// no pages yields an empty list.
///
/// The first failure aborts the run. Chunks written before it stay on disk.
///
/// # Errors
///
/// - [`Error::InvalidChunkSize`] if `max_pages_per_chunk == 0`
/// - [`Error::FileNotFound`], [`Error::FileAccess`] or
///   [`Error::DocumentFormat`] if the input cannot be loaded
/// - [`Error::FileAccess`] if the output directory cannot be created
/// - [`Error::PageCopy`], [`Error::PageCountMismatch`] or [`Error::Write`]
///   if a chunk cannot be built or written
pub fn split_with(config: &SplitConfig) -> Result<Vec<PathBuf>> {
    let partition = config.partition()?;
    let document = SourceDocument::open(&config.input_path)?;

    info!(
        input = %document.path().display(),
        pages = document.page_count(),
        max_pages = partition.max_pages(),
        "processing document"
    );

    std::fs::create_dir_all(&config.output_dir).map_err(|source| Error::FileAccess {
        path: config.output_dir.clone(),
        source,
    })?;

    let windows = partition.windows(document.page_count());
    let mut written = Vec::with_capacity(windows.len());

    for window in &windows {
        let path = document.write_window(window, &config.output_dir)?;
        info!(
            chunk = window.number(),
            first_page = window.first_page(),
            last_page = window.last_page(),
            file = %path.display(),
            "created chunk"
        );
        written.push(path);
    }

    info!(
        chunks = written.len(),
        output_dir = %config.output_dir.display(),
        "split complete"
    );

    Ok(written)
}
