//! Low-level document assembly.
//!
//! [`DocumentAssembler`] concatenates whole PDF documents in append order.
//! The first appended document becomes the base; each subsequent document is
//! renumbered past the current maximum object id, its objects are moved into
//! the base, and its page references are attached to the base's page tree.

use lopdf::{Document, Object, ObjectId};

use crate::error::{Result, StitchError};

/// Accumulates appended documents into one merged document.
#[derive(Debug, Default)]
pub struct DocumentAssembler {
    merged: Option<Document>,
    max_id: u32,
    appended: usize,
}

impl DocumentAssembler {
    /// Create an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents appended so far.
    pub fn appended(&self) -> usize {
        self.appended
    }

    /// Append a document, preserving its internal page order.
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::MergeFailed`] if the base document's page tree
    /// is structurally invalid.
    pub fn append(&mut self, mut doc: Document) -> Result<()> {
        match self.merged {
            None => {
                self.max_id = doc.max_id;
                self.merged = Some(doc);
            }
            Some(ref mut merged) => {
                // Avoid object id collisions by renumbering the incoming
                // document past everything already merged.
                doc.renumber_objects_with(self.max_id + 1);
                self.max_id = doc.max_id;

                let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
                merged.objects.extend(doc.objects);

                Self::attach_pages(merged, &page_ids)?;
            }
        }

        self.appended += 1;
        Ok(())
    }

    /// Finish assembly, compressing and renumbering the merged document.
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::NoMergeablePdfs`] if nothing was appended.
    pub fn finish(self) -> Result<Document> {
        let mut doc = self.merged.ok_or(StitchError::NoMergeablePdfs)?;
        doc.compress();
        doc.renumber_objects();
        Ok(doc)
    }

    /// Attach page references to the merged document's Pages dictionary.
    fn attach_pages(merged: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
        let catalog = merged
            .catalog_mut()
            .map_err(|e| StitchError::merge_failed(format!("Failed to get catalog: {e}")))?;

        let pages_id = catalog
            .get(b"Pages")
            .and_then(|p| p.as_reference())
            .map_err(|e| {
                StitchError::merge_failed(format!("Failed to get pages reference: {e}"))
            })?;

        let pages_dict = merged
            .get_object_mut(pages_id)
            .and_then(|o| o.as_dict_mut())
            .map_err(|e| StitchError::merge_failed(format!("Failed to get pages object: {e}")))?;

        let kids = pages_dict
            .get_mut(b"Kids")
            .and_then(|k| k.as_array_mut())
            .map_err(|_| StitchError::merge_failed("Pages dictionary missing Kids array"))?;

        for &page_id in page_ids {
            kids.push(Object::Reference(page_id));
        }

        let current_count = pages_dict
            .get(b"Count")
            .and_then(|c| c.as_i64())
            .unwrap_or(0);
        pages_dict.set(
            "Count",
            Object::Integer(current_count + page_ids.len() as i64),
        );

        Ok(())
    }
}
