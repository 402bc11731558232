//! Root application component and shared context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};

use crate::components::nav_bar::NavBar;
use crate::net::error::ApiError;
use crate::pages::{
    categories::CategoriesPage, dashboard::DashboardPage, expenses::ExpensesPage, login::LoginPage,
    new_expense::NewExpensePage, receipts::ReceiptsPage,
};
use crate::state::auth::AuthState;
use crate::state::ui::{Page, UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides auth and navigation contexts; page-level state is owned by each page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    let current_page = move || match ui.with(|u| u.page) {
        Page::Dashboard => view! { <DashboardPage/> }.into_any(),
        Page::Expenses => view! { <ExpensesPage/> }.into_any(),
        Page::NewExpense => view! { <NewExpensePage/> }.into_any(),
        Page::Categories => view! { <CategoriesPage/> }.into_any(),
        Page::Receipts => view! { <ReceiptsPage/> }.into_any(),
    };

    view! {
        <Title text="Expense Tracker"/>
        <Show when=move || auth.with(AuthState::is_authenticated) fallback=|| view! { <LoginPage/> }>
            <NavBar/>
            <main class="app-main">{current_page}</main>
        </Show>
    }
}

/// Current bearer token, read without subscribing.
pub fn session_token(auth: RwSignal<AuthState>) -> Option<String> {
    auth.with_untracked(AuthState::bearer)
}

/// Drop the session when the backend rejects the token, so the shell falls
/// back to the login page. Returns whether the session was dropped.
pub fn expire_on_unauthorized(auth: RwSignal<AuthState>, err: &ApiError) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    leptos::logging::warn!("session rejected by server; signing out");
    auth.update(AuthState::sign_out);
    true
}

/// Native confirmation prompt; always declines outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
