//! Grid of receipts with lazily fetched image thumbnails.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thumbnails and the modal preview are object URLs over authenticated
//! downloads; the gallery revokes every one it drops and all remaining ones
//! on unmount.

#[cfg(test)]
#[path = "receipt_gallery_test.rs"]
mod receipt_gallery_test;

use leptos::prelude::*;

use crate::app::{confirm, expire_on_unauthorized, session_token};
use crate::components::receipt_modal::ReceiptModal;
use crate::net::api::revoke_object_url;
use crate::net::types::Receipt;
use crate::state::auth::AuthState;
use crate::state::receipts::{DELETE_RECEIPT_CONFIRMATION, ReceiptGalleryState};
use crate::util::file::{is_image, is_pdf};
use crate::util::format::{format_date, format_file_size};

fn revoke_all(urls: impl IntoIterator<Item = String>) {
    for url in urls {
        revoke_object_url(&url);
    }
}

/// Hand a freshly fetched object URL to the gallery state. Returns every URL
/// the caller must revoke, including `url` itself once the gallery is gone.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn store_object_url(
    state: RwSignal<ReceiptGalleryState>,
    url: String,
    store: impl FnOnce(&mut ReceiptGalleryState, String) -> Option<String>,
) -> Option<String> {
    let mut pending = Some(url);
    match state.try_update(|s| pending.take().and_then(|url| store(s, url))) {
        Some(stale) => stale,
        None => pending,
    }
}

#[component]
pub fn ReceiptGallery(state: RwSignal<ReceiptGalleryState>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let deleting = RwSignal::new(false);

    // Thumbnail fetches rerun only when the listed receipts change, so a
    // failed fetch is not retried in a loop.
    let receipt_ids = Memo::new(move |_| state.with(|s| s.receipts.iter().map(|r| r.id.clone()).collect::<Vec<_>>()));

    Effect::new(move || {
        receipt_ids.track();
        let pending = state.with_untracked(ReceiptGalleryState::thumbnails_to_load);
        let Some(token) = session_token(auth) else {
            return;
        };
        for id in pending {
            state.update_untracked(|s| s.mark_loading(&id));
            #[cfg(feature = "hydrate")]
            {
                let token = token.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::receipt_object_url(&token, &id).await {
                        Ok(url) => {
                            revoke_all(store_object_url(state, url, |s, url| s.thumbnail_loaded(&id, url)));
                        }
                        Err(e) => {
                            leptos::logging::warn!("thumbnail {id} failed: {e}");
                            state.try_update(|s| s.thumbnail_failed(&id));
                        }
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    let open = move |receipt: Receipt| {
        let id = receipt.id.clone();
        let mut stale = None;
        state.update(|s| stale = s.open(receipt));
        revoke_all(stale);
        let Some(token) = session_token(auth) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::receipt_object_url(&token, &id).await {
                Ok(url) => {
                    revoke_all(store_object_url(state, url, |s, url| s.preview_loaded(&id, url)));
                }
                Err(e) => {
                    leptos::logging::warn!("receipt preview {id} failed: {e}");
                    expire_on_unauthorized(auth, &e);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, id);
    };

    let on_close = Callback::new(move |()| {
        let mut stale = None;
        state.update(|s| stale = s.close());
        revoke_all(stale);
    });

    let on_delete = Callback::new(move |id: String| {
        if deleting.get_untracked() || !confirm(DELETE_RECEIPT_CONFIRMATION) {
            return;
        }
        let Some(token) = session_token(auth) else {
            return;
        };
        deleting.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_receipt(&token, &id).await {
                Ok(()) => {
                    let mut stale = Vec::new();
                    state.update(|s| {
                        stale.extend(s.close());
                        stale.extend(s.remove(&id));
                    });
                    revoke_all(stale);
                }
                Err(e) => {
                    leptos::logging::warn!("receipt delete failed: {e}");
                    if !expire_on_unauthorized(auth, &e) {
                        let message = e.user_message(crate::state::receipts::DELETE_RECEIPT_FAILED);
                        state.update(|s| s.error = Some(message));
                    }
                }
            }
            deleting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, id);
    });

    on_cleanup(move || {
        if let Some(urls) = state.try_update_untracked(ReceiptGalleryState::take_all_urls) {
            revoke_all(urls);
        }
    });

    let cards = move || {
        state
            .with(|s| s.receipts.clone())
            .into_iter()
            .map(|receipt| {
                let id = receipt.id.clone();
                let thumb = move || state.with(|s| s.thumbnails.get(&id).cloned());
                let kind = if is_pdf(&receipt.mime_type) { "PDF" } else { "File" };
                let image = is_image(&receipt.mime_type);
                let caption = receipt.file_name.clone();
                let meta = format!("{} · {}", format_file_size(receipt.file_size), format_date(&receipt.created_at));
                let clicked = receipt.clone();
                view! {
                    <li class="receipt-card" on:click=move |_| open(clicked.clone())>
                        <div class="receipt-card__thumb">
                            {move || match thumb() {
                                Some(src) if image => view! { <img src=src alt="Receipt thumbnail"/> }.into_any(),
                                _ => view! { <span class="receipt-card__icon">{kind}</span> }.into_any(),
                            }}
                        </div>
                        <p class="receipt-card__name">{caption}</p>
                        <p class="receipt-card__meta">{meta}</p>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <section class="receipt-gallery">
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="form-error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || state.with(|s| !s.receipts.is_empty())
                fallback=move || {
                    view! {
                        <p class="receipt-gallery__empty">
                            {move || if state.with(|s| s.loading) { "Loading receipts..." } else { "No receipts found" }}
                        </p>
                    }
                }
            >
                <ul class="receipt-gallery__grid">{cards}</ul>
            </Show>
            {move || {
                state
                    .with(|s| s.selected.clone())
                    .map(|receipt| {
                        view! {
                            <ReceiptModal
                                receipt=receipt
                                url=Signal::derive(move || state.with(|s| s.selected_url.clone()))
                                deleting=deleting
                                on_close=on_close
                                on_delete=on_delete
                            />
                        }
                    })
            }}
        </section>
    }
}
