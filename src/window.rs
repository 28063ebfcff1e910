//! The PageWindow type: a contiguous run of pages destined for one chunk file.

/// A half-open range of zero-based page indices assigned to one output file.
///
/// ## Indices vs Page Numbers
///
/// `start` and `end` are zero-based indices into the source page sequence,
/// with `end` exclusive, so they slice like any Rust range. Filenames and log
/// lines use 1-based inclusive page numbers instead:
///
/// ```rust
/// use leaves::PageWindow;
///
/// let window = PageWindow::new(50, 100, 1);
///
/// assert_eq!(window.len(), 50);
/// assert_eq!(window.first_page(), 51);
/// assert_eq!(window.last_page(), 100);
/// assert_eq!(window.number(), 2);
/// ```
///
/// ## Tiling
///
/// Windows produced by [`FixedWindows`](crate::FixedWindows) never overlap and
/// never leave gaps: each window starts where the previous one ended.
///
/// ```text
/// 120 pages, 50 per chunk
///
/// Window 0: [0..50)     pages 1-50
/// Window 1: [50..100)   pages 51-100
/// Window 2: [100..120)  pages 101-120  <- final window may be shorter
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    /// Zero-based index of the first page.
    pub start: usize,
    /// Zero-based index one past the last page.
    pub end: usize,
    /// Zero-based index of this window in the sequence.
    pub index: usize,
}

impl PageWindow {
    /// Create a new window.
    #[must_use]
    pub const fn new(start: usize, end: usize, index: usize) -> Self {
        Self { start, end, index }
    }

    /// Number of pages in this window.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether this window holds no pages.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The page index span of this window.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// 1-based chunk number.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.index + 1
    }

    /// 1-based number of the first page.
    #[must_use]
    pub const fn first_page(&self) -> usize {
        self.start + 1
    }

    /// 1-based number of the last page (inclusive).
    #[must_use]
    pub const fn last_page(&self) -> usize {
        self.end
    }

    /// The output file name for this window.
    ///
    /// ```rust
    /// use leaves::PageWindow;
    ///
    /// let window = PageWindow::new(100, 120, 2);
    /// assert_eq!(window.file_name("report"), "report_chunk_03_pages_101-120.pdf");
    /// ```
    #[must_use]
    pub fn file_name(&self, stem: &str) -> String {
        format!(
            "{stem}_chunk_{:02}_pages_{}-{}.pdf",
            self.number(),
            self.first_page(),
            self.last_page()
        )
    }
}

impl std::fmt::Display for PageWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "chunk {} (pages {}-{})",
            self.number(),
            self.first_page(),
            self.last_page()
        )
    }
}
