//! The source document and page extraction.
//!
//! ## Building a Chunk
//!
//! A chunk starts life as a clone of the whole source. Its page tree is then
//! rewritten so the root `Pages` node lists only the window's pages:
//!
//! ```text
//! Source tree                      Chunk tree (window = pages 2-3)
//!
//! Pages (root, Resources R)        Pages (root)
//! ├── Pages (MediaBox M)           ├── Page 2 (Resources R, MediaBox M)
//! │   ├── Page 1                   └── Page 3 (Resources R)
//! │   └── Page 2
//! └── Page 3
//! ```
//!
//! Attributes a page inherited from intermediate nodes are copied onto the
//! page itself, since those nodes are dropped. The catalog is replaced by a
//! bare one so outlines pointing at other pages do not keep them alive.
//! Link annotations jumping to a page outside the window are removed, any
//! other reference to such a page becomes `null`, and everything no longer
//! reachable from the trailer is pruned.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lopdf::{dictionary, Document, Object, ObjectId};
use tracing::debug;

use crate::{Error, PageWindow, Result};

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&str; 4] = ["Resources", "MediaBox", "CropBox", "Rotate"];

/// Stem used when the input path has no file name.
const FALLBACK_STEM: &str = "document";

/// A parsed input PDF, held read-only for the duration of a split.
///
/// ```rust,no_run
/// use leaves::{FixedWindows, SourceDocument};
///
/// let source = SourceDocument::open("statute.pdf")?;
/// for window in FixedWindows::new(50)?.windows(source.page_count()) {
///     source.write_window(&window, "chunks")?;
/// }
/// # Ok::<(), leaves::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SourceDocument {
    path: PathBuf,
    stem: String,
    document: Document,
    pages: Vec<ObjectId>,
}

impl SourceDocument {
    /// Read and parse the PDF at `path`.
    ///
    /// # Errors
    ///
    /// [`Error::FileNotFound`] if the file does not exist,
    /// [`Error::FileAccess`] if it cannot be read, and
    /// [`Error::DocumentFormat`] if it is not a valid PDF.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::reading(path, source))?;
        Self::from_bytes(path, &bytes)
    }

    /// Parse a PDF already in memory. `path` names it in errors and output files.
    ///
    /// # Errors
    ///
    /// [`Error::DocumentFormat`] if `bytes` is not a valid PDF.
    pub fn from_bytes(path: impl AsRef<Path>, bytes: &[u8]) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let document = Document::load_mem(bytes).map_err(|source| Error::DocumentFormat {
            path: path.clone(),
            source,
        })?;
        let pages: Vec<ObjectId> = document.get_pages().into_values().collect();
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .unwrap_or_else(|| FALLBACK_STEM.to_owned());

        debug!(
            path = %path.display(),
            pages = pages.len(),
            objects = document.objects.len(),
            "loaded document"
        );

        Ok(Self {
            path,
            stem,
            document,
            pages,
        })
    }

    /// Path the document was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name used for chunk files.
    #[must_use]
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Total number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Build a new document holding exactly the pages in `window`, in order.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyWindow`] if `window` holds no pages,
    /// [`Error::PageCopy`] if the page tree cannot be rewritten, and
    /// [`Error::PageCountMismatch`] if the result does not hold `window.len()`
    /// pages (for instance when the window lies past the last page).
    pub fn extract(&self, window: &PageWindow) -> Result<Document> {
        if window.is_empty() {
            return Err(Error::EmptyWindow {
                chunk: window.number(),
                start: window.start,
                end: window.end,
            });
        }

        let copy_err = |source: lopdf::Error| Error::PageCopy {
            chunk: window.number(),
            first: window.first_page(),
            last: window.last_page(),
            source,
        };

        let total = self.pages.len();
        let end = window.end.min(total);
        let kept = &self.pages[window.start.min(end)..end];
        let kept_set: BTreeSet<ObjectId> = kept.iter().copied().collect();
        let dropped: BTreeSet<ObjectId> = self
            .pages
            .iter()
            .filter(|page_id| !kept_set.contains(page_id))
            .copied()
            .collect();
        let mut part = self.document.clone();

        let inherited = kept
            .iter()
            .map(|&page_id| inherited_attributes(&part, page_id).map(|attrs| (page_id, attrs)))
            .collect::<lopdf::Result<Vec<_>>>()
            .map_err(copy_err)?;

        let catalog_id = part
            .trailer
            .get(b"Root")
            .and_then(Object::as_reference)
            .map_err(copy_err)?;
        let pages_id = part
            .get_dictionary(catalog_id)
            .and_then(|catalog| catalog.get(b"Pages"))
            .and_then(Object::as_reference)
            .map_err(copy_err)?;

        for &page_id in kept {
            strip_foreign_links(&mut part, page_id, &dropped).map_err(copy_err)?;
        }

        for (page_id, attrs) in inherited {
            let page = part
                .get_object_mut(page_id)
                .and_then(|object| object.as_dict_mut())
                .map_err(copy_err)?;
            for (key, value) in attrs {
                page.set(key, value);
            }
            page.set("Parent", pages_id);
        }

        let root = part
            .get_object_mut(pages_id)
            .and_then(|object| object.as_dict_mut())
            .map_err(copy_err)?;
        root.set(
            "Kids",
            kept.iter().copied().map(Object::Reference).collect::<Vec<_>>(),
        );
        root.set("Count", kept.len() as i64);

        // Whatever still points at a dropped page would drag it, its
        // contents and its branch of the page tree into the chunk.
        for object in part.objects.values_mut() {
            detach(object, &dropped);
        }
        for page_id in &dropped {
            part.objects.remove(page_id);
        }

        part.objects.insert(
            catalog_id,
            Object::Dictionary(dictionary! {
                "Type" => "Catalog",
                "Pages" => pages_id,
            }),
        );
        part.prune_objects();
        part.renumber_objects();

        let actual = part.get_pages().len();
        if actual != window.len() {
            return Err(Error::PageCountMismatch {
                chunk: window.number(),
                expected: window.len(),
                actual,
            });
        }

        Ok(part)
    }

    /// Extract `window` and write it into `dir` under its chunk file name.
    ///
    /// Returns the path written. An existing file of the same name is
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Any error from [`extract`](Self::extract), or [`Error::Write`] if the
    /// file cannot be created or written.
    pub fn write_window(&self, window: &PageWindow, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let mut part = self.extract(window)?;
        let path = dir.as_ref().join(window.file_name(&self.stem));
        let write_err = |source: std::io::Error| Error::Write {
            path: path.clone(),
            source,
        };

        let mut writer = BufWriter::new(File::create(&path).map_err(write_err)?);
        part.save_to(&mut writer).map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        Ok(path)
    }
}

/// Collect the inheritable attributes `page_id` lacks but an ancestor defines.
///
/// The nearest ancestor wins, matching how viewers resolve inheritance.
fn inherited_attributes(
    doc: &Document,
    page_id: ObjectId,
) -> lopdf::Result<Vec<(&'static str, Object)>> {
    let page = doc.get_dictionary(page_id)?;
    let mut missing: Vec<&'static str> = INHERITABLE
        .into_iter()
        .filter(|key| !page.has(key.as_bytes()))
        .collect();
    let mut found = Vec::new();
    let mut visited = BTreeSet::new();
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

    while let Some(node_id) = parent {
        // A malformed tree may loop back on itself.
        if missing.is_empty() || !visited.insert(node_id) {
            break;
        }
        let node = doc.get_dictionary(node_id)?;
        missing.retain(|key| match node.get(key.as_bytes()) {
            Ok(value) => {
                found.push((*key, value.clone()));
                false
            }
            Err(_) => true,
        });
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    Ok(found)
}

/// Follow `object` if it is a reference.
fn resolve<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Object> {
    match object {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

/// Whether `annot` is a link whose destination is one of `dropped`.
///
/// Covers both `/Dest [page ...]` and `/A << /D [page ...] >>`. Named
/// destinations are left alone; the catalog holding them is replaced anyway.
fn links_to(doc: &Document, annot: &Object, dropped: &BTreeSet<ObjectId>) -> bool {
    let Some(Ok(dict)) = resolve(doc, annot).map(Object::as_dict) else {
        return false;
    };
    let dest = dict
        .get(b"Dest")
        .ok()
        .or_else(|| resolve(doc, dict.get(b"A").ok()?)?.as_dict().ok()?.get(b"D").ok());

    dest.and_then(|dest| resolve(doc, dest))
        .and_then(|dest| dest.as_array().ok())
        .and_then(|dest| dest.first())
        .and_then(|target| target.as_reference().ok())
        .is_some_and(|target| dropped.contains(&target))
}

/// Remove link annotations on `page_id` that jump to a dropped page.
fn strip_foreign_links(
    doc: &mut Document,
    page_id: ObjectId,
    dropped: &BTreeSet<ObjectId>,
) -> lopdf::Result<()> {
    let view: &Document = doc;
    let Some(annots) = view
        .get_dictionary(page_id)?
        .get(b"Annots")
        .ok()
        .and_then(|annots| resolve(view, annots))
        .and_then(|annots| annots.as_array().ok())
    else {
        return Ok(());
    };

    let retained: Vec<Object> = annots
        .iter()
        .filter(|annot| !links_to(view, annot, dropped))
        .cloned()
        .collect();
    if retained.len() == annots.len() {
        return Ok(());
    }

    let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
    if retained.is_empty() {
        page.remove(b"Annots");
    } else {
        page.set("Annots", retained);
    }
    Ok(())
}

/// Replace every reference to a dropped page inside `object` with null.
fn detach(object: &mut Object, dropped: &BTreeSet<ObjectId>) {
    if matches!(object, Object::Reference(id) if dropped.contains(id)) {
        *object = Object::Null;
        return;
    }
    match object {
        Object::Array(items) => items.iter_mut().for_each(|item| detach(item, dropped)),
        Object::Dictionary(dict) => dict.iter_mut().for_each(|(_, value)| detach(value, dropped)),
        Object::Stream(stream) => stream
            .dict
            .iter_mut()
            .for_each(|(_, value)| detach(value, dropped)),
        _ => {}
    }
}
