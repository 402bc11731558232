//! New-expense page hosting the expense form.

use leptos::prelude::*;

use crate::app::session_token;
use crate::components::expense_form::ExpenseForm;
use crate::net::types::{Category, Expense};
use crate::state::auth::AuthState;
use crate::state::ui::{Page, UiState};

#[component]
pub fn NewExpensePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let categories = RwSignal::new(Vec::<Category>::new());

    #[cfg(feature = "hydrate")]
    if let Some(token) = session_token(auth) {
        leptos::task::spawn_local(async move {
            match crate::net::api::list_categories(&token).await {
                Ok(list) => {
                    categories.try_set(list);
                }
                Err(e) => leptos::logging::warn!("category list failed: {e}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session_token(auth);

    let on_success = Callback::new(move |_: Expense| ui.update(|u| u.navigate(Page::Expenses)));
    let on_cancel = Callback::new(move |()| ui.update(|u| u.navigate(Page::Expenses)));

    view! {
        <div class="new-expense-page">
            <h1>"New Expense"</h1>
            <ExpenseForm categories=categories on_success=on_success on_cancel=on_cancel/>
        </div>
    }
}
