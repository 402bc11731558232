//! Receipt preview dialog with metadata and delete.

use leptos::prelude::*;

use crate::net::types::Receipt;
use crate::util::file::{is_image, is_pdf};
use crate::util::format::{format_datetime, format_file_size};

#[component]
pub fn ReceiptModal(
    receipt: Receipt,
    #[prop(into)] url: Signal<Option<String>>,
    #[prop(into)] deleting: Signal<bool>,
    on_close: Callback<()>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = receipt.id.clone();
    let mime = receipt.mime_type.clone();
    let title = receipt.file_name.clone();

    let preview = move || {
        let Some(src) = url.get() else {
            return view! { <p class="receipt-modal__loading">"Loading preview..."</p> }.into_any();
        };
        if is_image(&mime) {
            view! { <img class="receipt-modal__image" src=src alt="Receipt"/> }.into_any()
        } else if is_pdf(&mime) {
            view! { <iframe class="receipt-modal__pdf" src=src title="Receipt PDF"></iframe> }.into_any()
        } else {
            view! { <p>"Preview not available for this file type"</p> }.into_any()
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog receipt-modal" on:click=|ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>
                <div class="receipt-modal__preview">{preview}</div>
                <dl class="receipt-modal__meta">
                    <dt>"Type"</dt>
                    <dd>{receipt.mime_type.clone()}</dd>
                    <dt>"Size"</dt>
                    <dd>{format_file_size(receipt.file_size)}</dd>
                    <dt>"Uploaded"</dt>
                    <dd>{format_datetime(&receipt.created_at)}</dd>
                    <dt>"Notes"</dt>
                    <dd>{receipt.notes.clone().unwrap_or_else(|| "No notes".to_owned())}</dd>
                </dl>
                <footer class="dialog__footer">
                    <button
                        class="dialog__danger"
                        disabled=move || deleting.get()
                        on:click=move |_| on_delete.run(id.clone())
                    >
                        {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                    </button>
                    <button on:click=move |_| on_close.run(())>"Close"</button>
                </footer>
            </div>
        </div>
    }
}
