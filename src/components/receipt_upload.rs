//! Standalone receipt upload panel with notes and image preview.

use leptos::prelude::*;

use crate::app::{expire_on_unauthorized, session_token};
use crate::net::api::revoke_object_url;
use crate::net::types::Receipt;
use crate::state::auth::AuthState;
use crate::state::receipts::ReceiptUploadState;
use crate::util::file::SelectedFile;
use crate::util::format::format_file_size;

#[component]
pub fn ReceiptUpload(on_uploaded: Callback<Receipt>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(ReceiptUploadState::default());
    let file_input = NodeRef::<leptos::html::Input>::new();

    // The native input keeps its FileList across re-renders; clear it on reset.
    let input_epoch = Memo::new(move |_| state.with(|s| s.input_epoch));
    Effect::new(move |_| {
        if input_epoch.get() == 0 {
            return;
        }
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        let file = SelectedFile::from_input_event(&ev);
        #[cfg(not(feature = "hydrate"))]
        let file = {
            let _ = ev;
            None::<SelectedFile>
        };

        let mut stale = None;
        state.update(|s| stale = s.select(file));
        if let Some(url) = stale {
            revoke_object_url(&url);
        }
        if state.with_untracked(ReceiptUploadState::wants_preview) {
            let url = state.with_untracked(|s| s.selected.as_ref().and_then(SelectedFile::local_object_url));
            if let Some(url) = url {
                let mut rejected = None;
                state.update(|s| rejected = s.set_preview(url));
                if let Some(url) = rejected {
                    revoke_object_url(&url);
                }
            }
        }
    };

    let on_upload = move |_| {
        if state.with_untracked(|s| s.uploading) {
            return;
        }
        let mut request = None;
        state.update(|s| request = s.begin_upload());
        let Some((file, notes)) = request else {
            return;
        };
        let Some(token) = session_token(auth) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::upload_receipt(&token, &file, notes.as_deref()).await {
                Ok(receipt) => {
                    log::info!("uploaded receipt {}", receipt.id);
                    let mut stale = None;
                    state.update(|s| stale = s.finish_upload());
                    if let Some(url) = stale {
                        revoke_object_url(&url);
                    }
                    on_uploaded.run(receipt);
                }
                Err(e) => {
                    leptos::logging::warn!("receipt upload failed: {e}");
                    if !expire_on_unauthorized(auth, &e) {
                        let message = e.user_message(crate::state::receipts::UPLOAD_RECEIPT_FAILED);
                        state.update(|s| s.fail_upload(message));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (file, notes, token, on_uploaded);
    };

    let on_clear = move |_| {
        let mut stale = None;
        state.update(|s| stale = s.reset());
        if let Some(url) = stale {
            revoke_object_url(&url);
        }
    };

    on_cleanup(move || {
        if let Some(url) = state.try_update_untracked(|s| s.preview_url.take()).flatten() {
            revoke_object_url(&url);
        }
    });

    view! {
        <section class="receipt-upload">
            <h3>"Upload Receipt"</h3>
            <input type="file" accept="image/*,.pdf" node_ref=file_input on:change=on_file_change/>
            <Show when=move || state.with(|s| s.selected.is_some())>
                <p class="receipt-upload__file">
                    {move || {
                        state
                            .with(|s| {
                                s.selected
                                    .as_ref()
                                    .map(|f| format!("{} ({})", f.name, format_file_size(f.size)))
                            })
                            .unwrap_or_default()
                    }}
                </p>
            </Show>
            <Show when=move || state.with(|s| s.preview_url.is_some())>
                <img
                    class="receipt-upload__preview"
                    alt="Receipt preview"
                    src=move || state.with(|s| s.preview_url.clone().unwrap_or_default())
                />
            </Show>
            <textarea
                class="receipt-upload__notes"
                placeholder="Notes (optional)"
                prop:value=move || state.with(|s| s.notes.clone())
                on:input=move |ev| state.update(|s| s.notes = event_target_value(&ev))
            ></textarea>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="form-error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <div class="receipt-upload__actions">
                <button type="button" disabled=move || state.with(|s| s.uploading) on:click=on_upload>
                    {move || if state.with(|s| s.uploading) { "Uploading..." } else { "Upload" }}
                </button>
                <button type="button" disabled=move || state.with(|s| s.uploading) on:click=on_clear>
                    "Clear"
                </button>
            </div>
        </section>
    }
}
