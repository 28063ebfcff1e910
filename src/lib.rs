//! # leaves
//!
//! Split a large PDF into a sequence of smaller PDFs with a fixed page budget.
//!
//! ## The Problem
//!
//! Downstream tools (text extraction, analysis, embedding) often load a whole
//! document into memory. A 600-page statute that fits on disk can still blow
//! through a memory limit once parsed. Cutting it into fixed-size pieces keeps
//! each load small while losing nothing: every page lands in exactly one piece,
//! in its original order.
//!
//! ## How It Works
//!
//! ```text
//! statute.pdf (120 pages), max 50 pages per chunk
//!
//! statute_chunk_01_pages_1-50.pdf     [0..50)
//! statute_chunk_02_pages_51-100.pdf   [50..100)
//! statute_chunk_03_pages_101-120.pdf  [100..120)  <- final chunk may be shorter
//! ```
//!
//! 1. Parse the input once ([`SourceDocument`]).
//! 2. Partition the page range into windows ([`FixedWindows`], [`PageWindow`]).
//! 3. For each window, build a document holding just those pages and write it.
//!
//! Concatenating the outputs in order gives back the source pages in order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! let chunks = leaves::split("statute.pdf", "chunks", 50)?;
//! for path in &chunks {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), leaves::Error>(())
//! ```
//!
//! Or with a [`SplitConfig`]:
//!
//! ```rust,no_run
//! use leaves::SplitConfig;
//!
//! let config = SplitConfig::new("statute.pdf", "chunks").with_max_pages(25);
//! let chunks = leaves::split_with(&config)?;
//! # Ok::<(), leaves::Error>(())
//! ```
//!
//! ## Limitations
//!
//! There is no rollback: if writing chunk 3 fails, chunks 1 and 2 remain on
//! disk. Running two splits into the same directory at once is unsupported.
//! Encrypted inputs are not decrypted.

mod config;
mod error;
mod fixed;
mod source;
mod splitter;
mod window;

pub use config::{SplitConfig, DEFAULT_MAX_PAGES_PER_CHUNK};
pub use error::{Error, ErrorKind, Result};
pub use fixed::FixedWindows;
pub use source::SourceDocument;
pub use splitter::{split, split_with};
pub use window::PageWindow;
