//! Split configuration.

use std::path::{Path, PathBuf};

use crate::{FixedWindows, Result};

/// Pages per chunk when none is given.
pub const DEFAULT_MAX_PAGES_PER_CHUNK: usize = 50;

/// What to split, where to put it, and how large each piece may be.
///
/// # Examples
///
/// ```rust
/// use leaves::SplitConfig;
///
/// let config = SplitConfig::new("statute.pdf", "chunks");
/// assert_eq!(config.max_pages_per_chunk, 50);
///
/// let config = config.with_max_pages(10);
/// assert_eq!(config.max_pages_per_chunk, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// The PDF to split.
    pub input_path: PathBuf,
    /// Directory receiving the chunk files. Created if missing.
    pub output_dir: PathBuf,
    /// Upper bound on pages in each chunk. Must be at least 1.
    pub max_pages_per_chunk: usize,
}

impl SplitConfig {
    /// Create a configuration with the default chunk size.
    #[must_use]
    pub fn new(input_path: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            input_path: input_path.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            max_pages_per_chunk: DEFAULT_MAX_PAGES_PER_CHUNK,
        }
    }

    /// Set the maximum pages per chunk.
    #[must_use]
    pub fn with_max_pages(self, max_pages_per_chunk: usize) -> Self {
        Self {
            max_pages_per_chunk,
            ..self
        }
    }

    /// Check the chunk size and build the partitioner for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`](crate::Error::InvalidChunkSize)
    /// if `max_pages_per_chunk == 0`.
    pub fn partition(&self) -> Result<FixedWindows> {
        FixedWindows::new(self.max_pages_per_chunk)
    }
}
