//! Shared fixtures for integration tests.

use image::{Rgb, RgbImage};
use lopdf::{Document, Object, Stream, dictionary};
use std::path::{Path, PathBuf};

use pdfstitch::merge::Prompter;

/// Build and save a minimal PDF with the given number of A4 pages.
pub fn make_pdf(dir: &Path, name: &str, pages: u32) -> PathBuf {
    make_pdf_sized(dir, name, pages, 595, 842)
}

/// Like [`make_pdf`], but with a custom page size so pages from different
/// fixtures stay distinguishable after a merge.
pub fn make_pdf_sized(dir: &Path, name: &str, pages: u32, width: i64, height: i64) -> PathBuf {
    let path = dir.join(name);
    let mut doc = build_document(pages, width, height);
    doc.save(&path).expect("failed to save fixture PDF");
    path
}

/// Build a minimal document with a valid Catalog and Pages tree.
pub fn build_document(pages: u32, width: i64, height: i64) -> Document {
    let mut doc = Document::with_version("1.5");
    let mut kids = Vec::new();

    let resources_id = doc.add_object(Object::Dictionary(dictionary! {
        "ProcSet" => Object::Array(vec![Object::Name(b"PDF".to_vec())]),
    }));

    let pages_id = doc.new_object_id();
    for _ in 0..pages {
        let content_id = doc.add_object(Object::Stream(Stream::new(dictionary! {}, vec![])));
        let page_id = doc.add_object(Object::Dictionary(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => Object::Array(vec![0.into(), 0.into(), width.into(), height.into()]),
            "Resources" => Object::Reference(resources_id),
            "Contents" => Object::Reference(content_id),
        }));
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => Object::Array(kids),
            "Count" => Object::Integer(pages as i64),
        }),
    );

    let catalog_id = doc.add_object(Object::Dictionary(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    }));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc
}

/// Save a solid-color PNG of the given pixel size.
pub fn make_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([180u8, 90, 45]))
        .save(&path)
        .expect("failed to save fixture PNG");
    path
}

/// Save a solid-color JPEG of the given pixel size.
pub fn make_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([60u8, 120, 180]))
        .save(&path)
        .expect("failed to save fixture JPEG");
    path
}

/// MediaBox sizes (width, height) of every page, in page order.
pub fn page_sizes(doc: &Document) -> Vec<(f32, f32)> {
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            (
                media_box[2].as_float().unwrap(),
                media_box[3].as_float().unwrap(),
            )
        })
        .collect()
}

/// Prompter that answers from fixed values instead of the console.
pub struct ScriptedPrompter {
    pub filename: Option<String>,
    pub save_dir: Option<PathBuf>,
}

impl ScriptedPrompter {
    pub fn saving(filename: &str, dir: &Path) -> Self {
        Self {
            filename: Some(filename.to_string()),
            save_dir: Some(dir.to_path_buf()),
        }
    }

    pub fn cancelling_filename() -> Self {
        Self {
            filename: None,
            save_dir: None,
        }
    }

    pub fn cancelling_location(filename: &str) -> Self {
        Self {
            filename: Some(filename.to_string()),
            save_dir: None,
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn output_filename(&mut self) -> Option<String> {
        self.filename.clone()
    }

    fn save_location(&mut self, suggested: &str) -> Option<PathBuf> {
        self.save_dir.as_ref().map(|dir| dir.join(suggested))
    }
}
