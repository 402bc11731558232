//! Receipt upload panel and gallery state.
//!
//! DESIGN
//! ======
//! Previews and thumbnails are browser object URLs that must be revoked.
//! Every transition that drops a URL hands it back to the caller, so the
//! state never leaks one silently.

#[cfg(test)]
#[path = "receipts_test.rs"]
mod receipts_test;

use std::collections::{BTreeMap, BTreeSet};

use crate::net::types::Receipt;
use crate::util::file::SelectedFile;
pub use crate::util::file::{is_image, is_pdf};
use crate::util::validation::validate_receipt_selection;

pub const UPLOAD_RECEIPT_FAILED: &str = "Failed to upload receipt";
pub const LOAD_RECEIPTS_FAILED: &str = "Failed to load receipts";
pub const DELETE_RECEIPT_FAILED: &str = "Failed to delete receipt";
pub const DELETE_RECEIPT_CONFIRMATION: &str = "Are you sure you want to delete this receipt?";

/// Upload panel state.
#[derive(Clone, Debug, Default)]
pub struct ReceiptUploadState {
    pub selected: Option<SelectedFile>,
    pub notes: String,
    pub uploading: bool,
    pub error: Option<String>,
    pub preview_url: Option<String>,
    /// Bumped on every reset; the view clears the native file input when it changes.
    pub input_epoch: u64,
}

impl ReceiptUploadState {
    /// Replace the selection. Returns the previous preview URL to revoke.
    pub fn select(&mut self, file: Option<SelectedFile>) -> Option<String> {
        self.selected = file;
        self.error = None;
        self.preview_url.take()
    }

    /// Whether the current selection gets an inline preview.
    pub fn wants_preview(&self) -> bool {
        self.selected.as_ref().is_some_and(SelectedFile::is_image)
    }

    /// Store a preview URL for the current image. Returns the URL back when
    /// the selection is not an image so the caller can revoke it.
    pub fn set_preview(&mut self, url: String) -> Option<String> {
        if !self.wants_preview() {
            return Some(url);
        }
        self.preview_url.replace(url)
    }

    /// Validate the selection and mark the upload in flight.
    ///
    /// Returns the file and trimmed notes, or records the error and returns `None`.
    pub fn begin_upload(&mut self) -> Option<(SelectedFile, Option<String>)> {
        match validate_receipt_selection(self.selected.as_ref()) {
            Ok(file) => {
                let file = file.clone();
                self.uploading = true;
                self.error = None;
                let notes = Some(self.notes.trim().to_owned()).filter(|n| !n.is_empty());
                Some((file, notes))
            }
            Err(message) => {
                self.error = Some(message.to_owned());
                None
            }
        }
    }

    pub fn fail_upload(&mut self, message: impl Into<String>) {
        self.uploading = false;
        self.error = Some(message.into());
    }

    /// Clear the panel after a successful upload. Returns the preview URL to revoke.
    pub fn finish_upload(&mut self) -> Option<String> {
        self.uploading = false;
        self.reset()
    }

    /// Drop the selection, notes, and preview. Returns the preview URL to revoke.
    pub fn reset(&mut self) -> Option<String> {
        self.selected = None;
        self.notes.clear();
        self.error = None;
        self.input_epoch = self.input_epoch.wrapping_add(1);
        self.preview_url.take()
    }
}

/// Gallery grid plus the open preview modal.
#[derive(Clone, Debug, Default)]
pub struct ReceiptGalleryState {
    pub receipts: Vec<Receipt>,
    pub loading: bool,
    pub error: Option<String>,
    pub thumbnails: BTreeMap<String, String>,
    pub loading_thumbnails: BTreeSet<String>,
    pub selected: Option<Receipt>,
    pub selected_url: Option<String>,
}

impl ReceiptGalleryState {
    pub fn set_receipts(&mut self, receipts: Vec<Receipt>) {
        self.receipts = receipts;
        self.loading = false;
        self.error = None;
    }

    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Image receipts with neither a thumbnail nor a load in flight.
    pub fn thumbnails_to_load(&self) -> Vec<String> {
        self.receipts
            .iter()
            .filter(|r| is_image(&r.mime_type))
            .filter(|r| !self.thumbnails.contains_key(&r.id) && !self.loading_thumbnails.contains(&r.id))
            .map(|r| r.id.clone())
            .collect()
    }

    pub fn mark_loading(&mut self, id: &str) {
        self.loading_thumbnails.insert(id.to_owned());
    }

    /// Record a fetched thumbnail. Returns the URL back when the receipt is
    /// no longer listed, or a stale URL it replaced.
    pub fn thumbnail_loaded(&mut self, id: &str, url: String) -> Option<String> {
        self.loading_thumbnails.remove(id);
        if !self.receipts.iter().any(|r| r.id == id) {
            return Some(url);
        }
        self.thumbnails.insert(id.to_owned(), url)
    }

    pub fn thumbnail_failed(&mut self, id: &str) {
        self.loading_thumbnails.remove(id);
    }

    /// Open the preview. Returns the previous preview URL to revoke.
    pub fn open(&mut self, receipt: Receipt) -> Option<String> {
        self.selected = Some(receipt);
        self.selected_url.take()
    }

    /// Attach a fetched preview URL. Returns it back if the modal moved on.
    pub fn preview_loaded(&mut self, id: &str, url: String) -> Option<String> {
        if self.selected.as_ref().is_some_and(|r| r.id == id) {
            self.selected_url.replace(url)
        } else {
            Some(url)
        }
    }

    /// Close the preview. Returns its URL to revoke.
    pub fn close(&mut self) -> Option<String> {
        self.selected = None;
        self.selected_url.take()
    }

    /// Drop a deleted receipt. Returns its thumbnail URL to revoke.
    pub fn remove(&mut self, id: &str) -> Option<String> {
        self.receipts.retain(|r| r.id != id);
        self.loading_thumbnails.remove(id);
        self.thumbnails.remove(id)
    }

    pub fn prepend(&mut self, receipt: Receipt) {
        self.receipts.insert(0, receipt);
    }

    /// Every object URL held, emptied out for revocation on teardown.
    pub fn take_all_urls(&mut self) -> Vec<String> {
        let mut urls: Vec<String> = std::mem::take(&mut self.thumbnails).into_values().collect();
        urls.extend(self.selected_url.take());
        urls
    }
}
