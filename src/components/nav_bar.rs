//! Top navigation bar with page links and sign-out.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{Page, UiState};

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let user_name = move || auth.with(|a| a.session.as_ref().map(|s| s.name.clone()).unwrap_or_default());

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Expense Tracker"</span>
            <div class="nav-bar__links">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class=move || {
                                    if ui.with(|u| u.page == page) {
                                        "nav-bar__link nav-bar__link--active"
                                    } else {
                                        "nav-bar__link"
                                    }
                                }
                                on:click=move |_| ui.update(|u| u.navigate(page))
                            >
                                {page.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <span class="nav-bar__user">{user_name}</span>
            <button
                class="nav-bar__logout"
                on:click=move |_| {
                    auth.update(AuthState::sign_out);
                    ui.update(|u| u.navigate(Page::Dashboard));
                }
            >
                "Logout"
            </button>
        </nav>
    }
}
