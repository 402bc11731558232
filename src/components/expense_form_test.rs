use super::*;

#[test]
fn submit_phase_labels() {
    assert_eq!(SubmitPhase::Idle.label(), "Create Expense");
    assert_eq!(SubmitPhase::UploadingReceipt.label(), "Uploading receipt...");
    assert_eq!(SubmitPhase::Creating.label(), "Creating...");
}

#[test]
fn only_idle_accepts_submissions() {
    assert!(!SubmitPhase::Idle.is_busy());
    assert!(SubmitPhase::UploadingReceipt.is_busy());
    assert!(SubmitPhase::Creating.is_busy());
}

#[test]
fn receipt_attachment_starts_with_upload() {
    let mut input = ExpenseFormInput::default();
    assert_eq!(first_phase(&input), SubmitPhase::Creating);
    input.receipt = Some(SelectedFile::new("r.png", "image/png", 10));
    assert_eq!(first_phase(&input), SubmitPhase::UploadingReceipt);
}
