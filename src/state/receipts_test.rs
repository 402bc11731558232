use super::*;

fn receipt(id: &str, mime: &str) -> Receipt {
    Receipt {
        id: id.to_owned(),
        user_id: 1,
        expense_id: None,
        file_name: format!("{id}.bin"),
        mime_type: mime.to_owned(),
        file_size: 2048,
        notes: None,
        created_at: "2026-01-25T10:00:00".to_owned(),
        updated_at: "2026-01-25T10:00:00".to_owned(),
    }
}

// =============================================================
// ReceiptUploadState
// =============================================================

#[test]
fn select_clears_error_and_returns_stale_preview() {
    let mut state = ReceiptUploadState {
        error: Some("Please select a file".to_owned()),
        preview_url: Some("blob:old".to_owned()),
        ..Default::default()
    };
    let stale = state.select(Some(SelectedFile::new("a.png", "image/png", 10)));
    assert_eq!(stale.as_deref(), Some("blob:old"));
    assert_eq!(state.error, None);
    assert!(state.wants_preview());
}

#[test]
fn preview_only_for_images() {
    let mut state = ReceiptUploadState::default();
    state.select(Some(SelectedFile::new("a.pdf", "application/pdf", 10)));
    assert!(!state.wants_preview());
    assert_eq!(state.set_preview("blob:x".to_owned()).as_deref(), Some("blob:x"));
    assert_eq!(state.preview_url, None);

    state.select(Some(SelectedFile::new("a.jpg", "image/jpeg", 10)));
    assert_eq!(state.set_preview("blob:y".to_owned()), None);
    assert_eq!(state.preview_url.as_deref(), Some("blob:y"));
}

#[test]
fn begin_upload_without_file_sets_error() {
    let mut state = ReceiptUploadState::default();
    assert!(state.begin_upload().is_none());
    assert_eq!(state.error.as_deref(), Some("Please select a file"));
    assert!(!state.uploading);
}

#[test]
fn begin_upload_rejects_unsupported_type() {
    let mut state = ReceiptUploadState::default();
    state.select(Some(SelectedFile::new("a.txt", "text/plain", 10)));
    assert!(state.begin_upload().is_none());
    assert_eq!(state.error.as_deref(), Some("Only images and PDF files are supported"));
}

#[test]
fn begin_upload_returns_file_and_trimmed_notes() {
    let mut state = ReceiptUploadState::default();
    state.select(Some(SelectedFile::new("a.pdf", "application/pdf", 10)));
    state.notes = "  taxi ".to_owned();
    let (file, notes) = state.begin_upload().unwrap();
    assert_eq!(file.name, "a.pdf");
    assert_eq!(notes.as_deref(), Some("taxi"));
    assert!(state.uploading);

    state.notes = "   ".to_owned();
    assert_eq!(state.begin_upload().unwrap().1, None);
}

#[test]
fn finish_upload_resets_panel() {
    let mut state = ReceiptUploadState::default();
    state.select(Some(SelectedFile::new("a.png", "image/png", 10)));
    state.set_preview("blob:p".to_owned());
    state.notes = "n".to_owned();
    state.begin_upload();
    assert_eq!(state.finish_upload().as_deref(), Some("blob:p"));
    assert!(!state.uploading);
    assert_eq!(state.selected, None);
    assert!(state.notes.is_empty());
}

#[test]
fn upload_and_clear_both_reset_the_file_input() {
    let mut state = ReceiptUploadState::default();
    state.select(Some(SelectedFile::new("a.pdf", "application/pdf", 10)));
    state.begin_upload();
    state.finish_upload();
    assert_eq!(state.input_epoch, 1);

    state.select(Some(SelectedFile::new("b.pdf", "application/pdf", 10)));
    state.reset();
    assert_eq!(state.input_epoch, 2);
    assert!(state.begin_upload().is_none());
    assert_eq!(state.error.as_deref(), Some("Please select a file"));
}

#[test]
fn failed_upload_keeps_the_file_input() {
    let mut state = ReceiptUploadState::default();
    state.select(Some(SelectedFile::new("a.png", "image/png", 10)));
    state.begin_upload();
    state.fail_upload(UPLOAD_RECEIPT_FAILED);
    assert_eq!(state.input_epoch, 0);
}

#[test]
fn fail_upload_keeps_selection() {
    let mut state = ReceiptUploadState::default();
    state.select(Some(SelectedFile::new("a.png", "image/png", 10)));
    state.begin_upload();
    state.fail_upload(UPLOAD_RECEIPT_FAILED);
    assert!(!state.uploading);
    assert!(state.selected.is_some());
    assert_eq!(state.error.as_deref(), Some("Failed to upload receipt"));
}

// =============================================================
// ReceiptGalleryState thumbnails
// =============================================================

#[test]
fn thumbnails_to_load_skips_pdfs_loaded_and_in_flight() {
    let mut state = ReceiptGalleryState::default();
    state.set_receipts(vec![
        receipt("a", "image/png"),
        receipt("b", "application/pdf"),
        receipt("c", "image/jpeg"),
        receipt("d", "image/webp"),
    ]);
    state.mark_loading("c");
    state.thumbnail_loaded("d", "blob:d".to_owned());
    assert_eq!(state.thumbnails_to_load(), vec!["a".to_owned()]);
}

#[test]
fn thumbnail_failure_allows_retry() {
    let mut state = ReceiptGalleryState::default();
    state.set_receipts(vec![receipt("a", "image/png")]);
    state.mark_loading("a");
    assert!(state.thumbnails_to_load().is_empty());
    state.thumbnail_failed("a");
    assert_eq!(state.thumbnails_to_load(), vec!["a".to_owned()]);
}

#[test]
fn thumbnail_for_removed_receipt_is_handed_back() {
    let mut state = ReceiptGalleryState::default();
    state.set_receipts(vec![receipt("a", "image/png")]);
    state.mark_loading("a");
    state.remove("a");
    assert_eq!(state.thumbnail_loaded("a", "blob:a".to_owned()).as_deref(), Some("blob:a"));
    assert!(state.thumbnails.is_empty());
}

// =============================================================
// ReceiptGalleryState modal / list
// =============================================================

#[test]
fn open_and_close_hand_back_preview_urls() {
    let mut state = ReceiptGalleryState::default();
    state.set_receipts(vec![receipt("a", "image/png"), receipt("b", "image/png")]);
    assert_eq!(state.open(receipt("a", "image/png")), None);
    assert_eq!(state.preview_loaded("a", "blob:a".to_owned()), None);
    assert_eq!(state.open(receipt("b", "image/png")).as_deref(), Some("blob:a"));
    assert_eq!(state.preview_loaded("a", "blob:late".to_owned()).as_deref(), Some("blob:late"));
    assert_eq!(state.preview_loaded("b", "blob:b".to_owned()), None);
    assert_eq!(state.close().as_deref(), Some("blob:b"));
    assert_eq!(state.selected, None);
}

#[test]
fn remove_returns_thumbnail_url() {
    let mut state = ReceiptGalleryState::default();
    state.set_receipts(vec![receipt("a", "image/png"), receipt("b", "application/pdf")]);
    state.thumbnail_loaded("a", "blob:a".to_owned());
    assert_eq!(state.remove("a").as_deref(), Some("blob:a"));
    assert_eq!(state.remove("b"), None);
    assert!(state.receipts.is_empty());
}

#[test]
fn prepend_puts_new_receipt_first() {
    let mut state = ReceiptGalleryState::default();
    state.set_receipts(vec![receipt("a", "image/png")]);
    state.prepend(receipt("new", "application/pdf"));
    let ids: Vec<_> = state.receipts.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "a"]);
}

#[test]
fn take_all_urls_empties_everything() {
    let mut state = ReceiptGalleryState::default();
    state.set_receipts(vec![receipt("a", "image/png"), receipt("b", "image/png")]);
    state.thumbnail_loaded("a", "blob:a".to_owned());
    state.thumbnail_loaded("b", "blob:b".to_owned());
    state.open(receipt("a", "image/png"));
    state.preview_loaded("a", "blob:p".to_owned());
    let mut urls = state.take_all_urls();
    urls.sort();
    assert_eq!(urls, vec!["blob:a", "blob:b", "blob:p"]);
    assert!(state.thumbnails.is_empty());
    assert_eq!(state.selected_url, None);
}

#[test]
fn mime_classification() {
    assert!(is_image("image/png"));
    assert!(is_pdf("application/pdf"));
    assert!(!is_image("application/pdf"));
}
