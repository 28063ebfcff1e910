//! Synthetic PDFs for integration tests.
//!
//! Every page draws a single marker string, `page-NNNN` with its 1-based
//! source page number, so tests can tell which pages ended up where.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lopdf::{dictionary, Document, Object, Stream};

/// Marker drawn on 1-based page `number`.
pub fn marker(number: usize) -> String {
    format!("page-{number:04}")
}

/// A PDF with `pages` pages under a single page tree node.
pub fn sample_pdf(pages: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let kids: Vec<Object> = (1..=pages)
        .map(|number| {
            let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", marker(number));
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            Object::Reference(page_id)
        })
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(595),
                Object::Integer(842),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialize sample pdf");
    bytes
}

/// A PDF with `pages` pages grouped three to a branch node, where every page
/// carries a link to the last page and page 1 also has a table-of-contents
/// style `GoTo` link to every other page.
pub fn linked_pdf(pages: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let root_id = doc.new_object_id();
    let page_ids: Vec<_> = (0..pages).map(|_| doc.new_object_id()).collect();
    let last = *page_ids.last().expect("at least one page");

    let mut branches = Vec::new();
    for group in page_ids.chunks(3) {
        let branch_id = doc.new_object_id();
        for &page_id in group {
            let number = page_ids.iter().position(|&id| id == page_id).unwrap() + 1;
            let content = format!("BT 72 720 Td ({}) Tj ET", marker(number));
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

            let mut annots = vec![Object::Dictionary(dictionary! {
                "Type" => "Annot",
                "Subtype" => "Link",
                "Dest" => vec![Object::Reference(last), "Fit".into()],
            })];
            if number == 1 {
                for &target in &page_ids[1..] {
                    let link_id = doc.add_object(dictionary! {
                        "Type" => "Annot",
                        "Subtype" => "Link",
                        "A" => dictionary! {
                            "S" => "GoTo",
                            "D" => vec![Object::Reference(target), "Fit".into()],
                        },
                    });
                    annots.push(Object::Reference(link_id));
                }
            }

            doc.objects.insert(
                page_id,
                Object::Dictionary(dictionary! {
                    "Type" => "Page",
                    "Parent" => branch_id,
                    "Contents" => content_id,
                    "Annots" => annots,
                }),
            );
        }
        doc.objects.insert(
            branch_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Parent" => root_id,
                "Kids" => group.iter().copied().map(Object::Reference).collect::<Vec<_>>(),
                "Count" => group.len() as i64,
            }),
        );
        branches.push(Object::Reference(branch_id));
    }

    doc.objects.insert(
        root_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => branches,
            "Count" => pages as i64,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(595),
                Object::Integer(842),
            ],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => root_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialize linked pdf");
    bytes
}

/// Write a sample PDF with `pages` pages to `dir/name`.
pub fn write_sample(dir: &Path, name: &str, pages: usize) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, sample_pdf(pages)).expect("write sample pdf");
    path
}

/// The page markers of a PDF on disk, in page order.
pub fn page_markers(path: &Path) -> Vec<String> {
    let doc = Document::load(path).expect("load chunk");
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let content = doc.get_page_content(page_id).expect("page content");
            let content = String::from_utf8_lossy(&content);
            let start = content.find("page-").expect("marker present");
            content[start..start + "page-0000".len()].to_owned()
        })
        .collect()
}

/// File names in `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read output dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
