//! Image to single-page-PDF conversion.
//!
//! Each queued image becomes one temp PDF next to its source, named
//! `<stem>_temp.pdf`. The image is decoded, flattened to plain 8-bit RGB
//! (alpha is discarded, not composited against a background; palette images
//! are expanded), and embedded as a DeviceRGB XObject on a page sized so
//! that one pixel maps to `72 / dpi` points.
//!
//! Conversion is strictly sequential. A progress callback fires after each
//! image, synchronously, before the next one is decoded.

use image::RgbImage;
use lopdf::{Document, Object, Stream, dictionary};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, StitchError};
use crate::utils;

/// Fixed raster-to-page scale used unless overridden.
pub const DEFAULT_DPI: f32 = 100.0;

/// Converts images into single-page PDF documents.
#[derive(Debug, Clone)]
pub struct ImageToPdfConverter {
    dpi: f32,
}

impl ImageToPdfConverter {
    /// Create a converter at the default resolution of 100 DPI.
    pub fn new() -> Self {
        Self { dpi: DEFAULT_DPI }
    }

    /// Create a converter at a custom resolution.
    pub fn with_dpi(dpi: f32) -> Self {
        Self { dpi }
    }

    /// Convert each image to a temp PDF, preserving input order.
    ///
    /// Returns the temp-artifact paths in the same order as `images`.
    /// `on_progress(completed, total)` is called after each image.
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::ImageDecode`] if a file is unreadable or not a
    /// valid image, and write errors if the temp PDF cannot be created.
    /// Conversion stops at the first failure; artifacts already written
    /// stay on disk.
    pub fn convert<F>(&self, images: &[PathBuf], mut on_progress: F) -> Result<Vec<PathBuf>>
    where
        F: FnMut(usize, usize),
    {
        let total = images.len();
        let mut artifacts = Vec::with_capacity(total);

        for (idx, image_path) in images.iter().enumerate() {
            let artifact = utils::temp_pdf_path(image_path);
            self.convert_one(image_path, &artifact)?;
            artifacts.push(artifact);
            on_progress(idx + 1, total);
        }

        Ok(artifacts)
    }

    /// Convert a single image, writing the page document to `dest`.
    ///
    /// Any stale file at `dest` is silently overwritten.
    pub fn convert_one(&self, source: &Path, dest: &Path) -> Result<()> {
        let decoded = image::open(source)
            .map_err(|e| StitchError::image_decode(source.to_path_buf(), e.to_string()))?;

        // Flattens RGBA and palette data; alpha is dropped, not composited.
        let rgb = decoded.into_rgb8();

        let mut doc = build_page_document(&rgb, self.dpi);
        doc.compress();

        let file = File::create(dest).map_err(|e| StitchError::FailedToCreateOutput {
            path: dest.to_path_buf(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);

        doc.save_to(&mut writer)
            .map_err(|e| StitchError::FailedToWrite {
                path: dest.to_path_buf(),
                source: std::io::Error::other(e),
            })?;
        writer.flush().map_err(|e| StitchError::FailedToWrite {
            path: dest.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }
}

impl Default for ImageToPdfConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a one-page document with `rgb` drawn over the full page.
fn build_page_document(rgb: &RgbImage, dpi: f32) -> Document {
    let (width_px, height_px) = rgb.dimensions();
    let width_pt = width_px as f32 * 72.0 / dpi;
    let height_pt = height_px as f32 * 72.0 / dpi;

    let mut doc = Document::with_version("1.5");

    let image_id = doc.add_object(Object::Stream(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width_px as i64,
            "Height" => height_px as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        rgb.as_raw().clone(),
    )));

    // Scale the unit image square to the full page, then draw it.
    let content = format!("q\n{width_pt} 0 0 {height_pt} 0 0 cm\n/Im0 Do\nQ\n");
    let content_id = doc.add_object(Object::Stream(Stream::new(
        dictionary! {},
        content.into_bytes(),
    )));

    let resources_id = doc.add_object(Object::Dictionary(dictionary! {
        "XObject" => dictionary! {
            "Im0" => Object::Reference(image_id),
        },
    }));

    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(Object::Dictionary(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => Object::Array(vec![
            0.into(),
            0.into(),
            width_pt.into(),
            height_pt.into(),
        ]),
        "Resources" => Object::Reference(resources_id),
        "Contents" => Object::Reference(content_id),
    }));

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => Object::Array(vec![Object::Reference(page_id)]),
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(Object::Dictionary(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    }));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc
}
