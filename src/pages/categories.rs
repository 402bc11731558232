//! Categories page: list, add/edit form, and delete.

use leptos::prelude::*;

use crate::app::{confirm, expire_on_unauthorized, session_token};
use crate::net::types::Category;
use crate::state::auth::AuthState;
use crate::state::categories::{CategoryEditorState, CategorySubmit, delete_confirmation};

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(CategoryEditorState::default());

    let load = move || {
        let Some(token) = session_token(auth) else {
            return;
        };
        state.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_categories(&token).await {
                Ok(list) => {
                    state.try_update(|s| {
                        s.items = list;
                        s.loading = false;
                    });
                }
                Err(e) => {
                    leptos::logging::warn!("category list failed: {e}");
                    if !expire_on_unauthorized(auth, &e) {
                        let message = e.user_message(crate::state::categories::LOAD_CATEGORIES_FAILED);
                        state.try_update(|s| {
                            s.loading = false;
                            s.error = Some(message);
                        });
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    load();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.submitting) {
            return;
        }
        let mut request = None;
        state.update(|s| request = s.submit_request());
        let Some(request) = request else {
            return;
        };
        let Some(token) = session_token(auth) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match &request {
                CategorySubmit::Create { name } => crate::net::api::create_category(&token, name).await,
                CategorySubmit::Update { id, name } => crate::net::api::update_category(&token, *id, name).await,
            };
            match result {
                Ok(saved) => {
                    log::info!("saved category {}", saved.id);
                    state.update(CategoryEditorState::finish_submit);
                    load();
                }
                Err(e) => {
                    leptos::logging::warn!("category save failed: {e}");
                    if !expire_on_unauthorized(auth, &e) {
                        let message = e.user_message(crate::state::categories::SAVE_CATEGORY_FAILED);
                        state.update(|s| s.fail_submit(message));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, request);
    };

    let on_delete = Callback::new(move |category: Category| {
        if !confirm(&delete_confirmation(&category.name)) {
            return;
        }
        let Some(token) = session_token(auth) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_category(&token, category.id).await {
                Ok(()) => load(),
                Err(e) => {
                    leptos::logging::warn!("category delete failed: {e}");
                    if !expire_on_unauthorized(auth, &e) {
                        let message = e.user_message(crate::state::categories::DELETE_CATEGORY_FAILED);
                        state.update(|s| s.error = Some(message));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, category);
    });

    let on_edit = Callback::new(move |category: Category| state.update(|s| s.open_edit(&category)));

    let rows = move || {
        state
            .with(|s| s.items.clone())
            .into_iter()
            .map(|category| {
                let edit_target = category.clone();
                let delete_target = category.clone();
                view! {
                    <li class="category-list__item">
                        <span class="category-list__name">{category.name}</span>
                        <button on:click=move |_| on_edit.run(edit_target.clone())>"Edit"</button>
                        <button class="category-list__delete" on:click=move |_| on_delete.run(delete_target.clone())>
                            "Delete"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="categories-page">
            <header class="categories-page__header">
                <h1>"Categories"</h1>
                <Show when=move || state.with(|s| s.editor.is_none())>
                    <button on:click=move |_| state.update(CategoryEditorState::open_create)>"Add Category"</button>
                </Show>
            </header>

            <Show when=move || state.with(|s| s.editor.is_some())>
                <form class="category-form" on:submit=on_submit>
                    <h2>{move || state.with(CategoryEditorState::title)}</h2>
                    <input
                        type="text"
                        placeholder="Category name"
                        prop:value=move || state.with(|s| s.name.clone())
                        on:input=move |ev| state.update(|s| s.name = event_target_value(&ev))
                    />
                    <div class="category-form__actions">
                        <button type="submit" disabled=move || state.with(|s| s.submitting)>
                            {move || state.with(CategoryEditorState::submit_label)}
                        </button>
                        <button type="button" on:click=move |_| state.update(CategoryEditorState::cancel)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="form-error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || state.with(|s| !s.items.is_empty())
                fallback=move || {
                    view! {
                        <p class="categories-page__empty">
                            {move || if state.with(|s| s.loading) { "Loading categories..." } else { "No categories yet" }}
                        </p>
                    }
                }
            >
                <ul class="category-list">{rows}</ul>
            </Show>
        </div>
    }
}
