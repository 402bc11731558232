//! Previous/next pagination controls.

use leptos::prelude::*;

#[component]
pub fn Pager(
    /// Zero-based current page.
    #[prop(into)]
    page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] can_prev: Signal<bool>,
    #[prop(into)] can_next: Signal<bool>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pager">
            <button class="pager__button" disabled=move || !can_prev.get() on:click=move |_| on_prev.run(())>
                "Previous"
            </button>
            <span class="pager__status">
                {move || format!("Page {} of {}", page.get() + 1, total_pages.get().max(1))}
            </span>
            <button class="pager__button" disabled=move || !can_next.get() on:click=move |_| on_next.run(())>
                "Next"
            </button>
        </div>
    }
}
