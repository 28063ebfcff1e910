//! Error types for leaves.

use std::path::PathBuf;

/// Errors that can occur while splitting a document.
///
/// Every variant names the path (or chunk) it failed on. Use [`Error::kind`]
/// to branch on the broad category instead of matching individual variants.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// The input document does not exist.
    #[error("input document not found: {}", path.display())]
    FileNotFound {
        /// The missing input path.
        path: PathBuf,
    },

    /// The input could not be read, or the output directory could not be created.
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        /// The path that could not be accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The input is not a parseable PDF document.
    #[error("{} is not a valid PDF document: {source}", path.display())]
    DocumentFormat {
        /// The input path.
        path: PathBuf,
        /// Underlying parser error.
        source: lopdf::Error,
    },

    /// A window with no pages was asked to be extracted.
    #[error("chunk {chunk} covers no pages (indices {start}..{end})")]
    EmptyWindow {
        /// 1-based chunk number.
        chunk: usize,
        /// Zero-based start index of the window.
        start: usize,
        /// Zero-based end index of the window.
        end: usize,
    },

    /// Copying the pages of one chunk into a new document failed.
    #[error("failed to copy pages {first}-{last} for chunk {chunk}: {source}")]
    PageCopy {
        /// 1-based chunk number.
        chunk: usize,
        /// First page of the chunk (1-based).
        first: usize,
        /// Last page of the chunk (1-based, inclusive).
        last: usize,
        /// Underlying document error.
        source: lopdf::Error,
    },

    /// A chunk was built with the wrong number of pages.
    #[error("chunk {chunk} has {actual} pages, expected {expected}")]
    PageCountMismatch {
        /// 1-based chunk number.
        chunk: usize,
        /// Pages assigned to the chunk.
        expected: usize,
        /// Pages found in the built document.
        actual: usize,
    },

    /// Writing a chunk file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The chunk file being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input missing.
    FileNotFound,
    /// Permission or creation failure on input or output.
    FileAccess,
    /// Input cannot be parsed as a PDF.
    DocumentFormat,
    /// Non-positive chunk size, or an empty window.
    InvalidConfig,
    /// Failure while building or writing a chunk.
    Io,
}

impl Error {
    /// The category this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidChunkSize(_) | Self::EmptyWindow { .. } => ErrorKind::InvalidConfig,
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::FileAccess { .. } => ErrorKind::FileAccess,
            Self::DocumentFormat { .. } => ErrorKind::DocumentFormat,
            Self::PageCopy { .. } | Self::PageCountMismatch { .. } | Self::Write { .. } => {
                ErrorKind::Io
            }
        }
    }

    /// Classify a failure to read the input file.
    pub(crate) fn reading(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileAccess { path, source }
        }
    }
}

/// Result type for leaves operations.
pub type Result<T> = std::result::Result<T, Error>;
