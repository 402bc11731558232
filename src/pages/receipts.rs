//! Receipts page: upload panel plus the unassigned-receipt gallery.

use leptos::prelude::*;

use crate::app::{expire_on_unauthorized, session_token};
use crate::components::receipt_gallery::ReceiptGallery;
use crate::components::receipt_upload::ReceiptUpload;
use crate::net::types::Receipt;
use crate::state::auth::AuthState;
use crate::state::receipts::ReceiptGalleryState;

#[component]
pub fn ReceiptsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gallery = RwSignal::new(ReceiptGalleryState::default());

    if let Some(token) = session_token(auth) {
        gallery.update(|g| g.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_unassigned_receipts(&token).await {
                Ok(list) => {
                    gallery.try_update(|g| g.set_receipts(list));
                }
                Err(e) => {
                    leptos::logging::warn!("receipt list failed: {e}");
                    if !expire_on_unauthorized(auth, &e) {
                        let message = e.user_message(crate::state::receipts::LOAD_RECEIPTS_FAILED);
                        gallery.try_update(|g| g.fail_load(message));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    }

    let on_uploaded = Callback::new(move |receipt: Receipt| gallery.update(|g| g.prepend(receipt)));

    view! {
        <div class="receipts-page">
            <h1>"Receipts"</h1>
            <ReceiptUpload on_uploaded=on_uploaded/>
            <h2>"Unassigned Receipts"</h2>
            <ReceiptGallery state=gallery/>
        </div>
    }
}
