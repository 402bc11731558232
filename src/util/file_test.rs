use super::*;

#[test]
fn is_image_matches_image_prefix_case_insensitively() {
    assert!(is_image("image/png"));
    assert!(is_image("IMAGE/JPEG"));
    assert!(!is_image("application/pdf"));
    assert!(!is_image(""));
}

#[test]
fn is_pdf_matches_exact_type() {
    assert!(is_pdf("application/pdf"));
    assert!(is_pdf("Application/PDF"));
    assert!(!is_pdf("application/pdf-x"));
}

#[test]
fn supported_receipt_types_are_images_and_pdfs() {
    assert!(is_supported_receipt("image/webp"));
    assert!(is_supported_receipt("application/pdf"));
    assert!(!is_supported_receipt("text/plain"));
}

#[test]
fn selected_file_classifies_itself() {
    let photo = SelectedFile::new("lunch.jpg", "image/jpeg", 2048);
    assert!(photo.is_image());
    assert!(!photo.is_pdf());
    let scan = SelectedFile::new("invoice.pdf", "application/pdf", 4096);
    assert!(scan.is_pdf());
}

#[test]
fn local_object_url_needs_a_browser_handle() {
    assert_eq!(SelectedFile::new("lunch.jpg", "image/jpeg", 2048).local_object_url(), None);
}
