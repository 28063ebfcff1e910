//! Fixed-size page partitioning.
//!
//! Every output file gets `max_pages` pages except possibly the last, which
//! takes whatever remains.
//!
//! ## How It Works
//!
//! ```text
//! max_pages = 50, pages = 120
//!
//! Window 0: [0..50)
//! Window 1: [50..100)   <- starts where window 0 ended
//! Window 2: [100..120)  <- final window holds the remaining 20
//! ```
//!
//! Unlike text chunking there is no overlap: a page belongs to exactly one
//! output file, so concatenating the outputs reproduces the source.

use crate::{Error, PageWindow, Result};

/// Partitions a page count into consecutive windows of at most `max_pages`.
///
/// ## Example
///
/// ```rust
/// use leaves::FixedWindows;
///
/// let windows = FixedWindows::new(50).unwrap().windows(120);
///
/// assert_eq!(windows.len(), 3);
/// assert_eq!(windows[2].span(), 100..120);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWindows {
    max_pages: usize,
}

impl FixedWindows {
    /// Create a partitioner.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `max_pages == 0`.
    pub fn new(max_pages: usize) -> Result<Self> {
        if max_pages == 0 {
            return Err(Error::InvalidChunkSize(max_pages));
        }
        Ok(Self { max_pages })
    }

    /// Maximum pages per window.
    #[must_use]
    pub const fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Split `page_count` pages into windows, in source order.
    #[must_use]
    pub fn windows(&self, page_count: usize) -> Vec<PageWindow> {
        let mut windows = Vec::with_capacity(self.estimate_windows(page_count));
        let mut start = 0;

        while start < page_count {
            let end = (start + self.max_pages).min(page_count);
            windows.push(PageWindow::new(start, end, windows.len()));
            start = end;
        }

        windows
    }

    /// Number of windows `page_count` pages will produce.
    #[must_use]
    pub fn estimate_windows(&self, page_count: usize) -> usize {
        page_count.div_ceil(self.max_pages)
    }
}
