//! Expenses page: filter panel, paginated table, and delete.

use leptos::prelude::*;

use crate::app::{confirm, expire_on_unauthorized, session_token};
use crate::components::pager::Pager;
use crate::config::{ClientConfig, PAGE_SIZE_OPTIONS};
use crate::net::types::{Category, Expense};
use crate::state::auth::AuthState;
use crate::state::expenses::{DELETE_EXPENSE_CONFIRMATION, ExpenseListState, FilterField};
use crate::state::ui::{Page, UiState};
use crate::util::format::{SUPPORTED_CURRENCIES, format_currency, format_date};

#[component]
pub fn ExpensesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let state = RwSignal::new(ExpenseListState::with_page_size(ClientConfig::get().default_page_size));
    let categories = RwSignal::new(Vec::<Category>::new());

    let load = move || {
        let Some(token) = session_token(auth) else {
            return;
        };
        let query = state.with_untracked(ExpenseListState::query);
        state.update(ExpenseListState::begin_load);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_expenses(&token, &query).await {
                Ok(page) => {
                    state.try_update(|s| s.finish_load(page));
                }
                Err(e) => {
                    leptos::logging::warn!("expense list failed: {e}");
                    if !expire_on_unauthorized(auth, &e) {
                        let message = e.user_message(crate::state::expenses::LOAD_EXPENSES_FAILED);
                        state.try_update(|s| s.fail_load(message));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, query);
    };

    load();

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

    let on_delete = Callback::new(move |id: i64| {
        if !confirm(DELETE_EXPENSE_CONFIRMATION) {
            return;
        }
        let Some(token) = session_token(auth) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_expense(&token, id).await {
                Ok(()) => {
                    log::info!("deleted expense {id}");
                    load();
                }
                Err(e) => {
                    leptos::logging::warn!("expense delete failed: {e}");
                    if !expire_on_unauthorized(auth, &e) {
                        let message = e.user_message(crate::state::expenses::DELETE_EXPENSE_FAILED);
                        state.update(|s| s.error = Some(message));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, id);
    });

    let on_apply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.update(ExpenseListState::apply_filters);
        load();
    };
    let on_clear = move |_| {
        state.update(ExpenseListState::clear_filters);
        load();
    };
    let on_prev = Callback::new(move |()| {
        let mut moved = false;
        state.update(|s| moved = s.prev_page());
        if moved {
            load();
        }
    });
    let on_next = Callback::new(move |()| {
        let mut moved = false;
        state.update(|s| moved = s.next_page());
        if moved {
            load();
        }
    });
    let on_size = move |ev: leptos::ev::Event| {
        let Ok(size) = event_target_value(&ev).parse::<u32>() else {
            return;
        };
        let mut changed = false;
        state.update(|s| changed = s.set_page_size(size));
        if changed {
            load();
        }
    };

    let form_input = move |label: &'static str, kind: &'static str, field: FilterField| {
        view! {
            <label>
                {label}
                <input
                    type=kind
                    prop:value=move || state.with(|s| s.form.get(field).to_owned())
                    on:input=move |ev| state.update(|s| s.form.set(field, event_target_value(&ev)))
                />
            </label>
        }
    };

    let rows = move || {
        state
            .with(|s| s.items.clone())
            .into_iter()
            .map(|expense| view! { <ExpenseRow expense=expense on_delete=on_delete/> })
            .collect_view()
    };

    view! {
        <div class="expenses-page">
            <header class="expenses-page__header">
                <h1>"Expenses"</h1>
                <button on:click=move |_| ui.update(|u| u.navigate(Page::NewExpense))>"Add Expense"</button>
            </header>

            <form class="filter-panel" on:submit=on_apply>
                {form_input("From", "date", FilterField::FromDate)}
                {form_input("To", "date", FilterField::ToDate)}
                <label>
                    "Category"
                    <select
                        prop:value=move || state.with(|s| s.form.get(FilterField::CategoryId).to_owned())
                        on:change=move |ev| state.update(|s| s.form.set(FilterField::CategoryId, event_target_value(&ev)))
                    >
                        <option value="">"All categories"</option>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                {form_input("Min amount", "number", FilterField::MinAmount)}
                {form_input("Max amount", "number", FilterField::MaxAmount)}
                {form_input("Search", "text", FilterField::Q)}
                <label>
                    "Currency"
                    <select
                        prop:value=move || state.with(|s| s.form.get(FilterField::Currency).to_owned())
                        on:change=move |ev| state.update(|s| s.form.set(FilterField::Currency, event_target_value(&ev)))
                    >
                        <option value="">"All currencies"</option>
                        {SUPPORTED_CURRENCIES
                            .into_iter()
                            .map(|(code, label)| view! { <option value=code>{label}</option> })
                            .collect_view()}
                    </select>
                </label>
                {form_input("Tag", "text", FilterField::Tag)}
                <div class="filter-panel__actions">
                    <button type="submit">"Apply Filters"</button>
                    <button type="button" on:click=on_clear>"Clear"</button>
                </div>
            </form>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="form-error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || state.with(|s| !s.items.is_empty())
                fallback=move || {
                    view! {
                        <p class="expenses-page__empty">
                            {move || if state.with(|s| s.loading) { "Loading expenses..." } else { "No expenses found" }}
                        </p>
                    }
                }
            >
                <table class="expense-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Description"</th>
                            <th>"Category"</th>
                            <th>"Tags"</th>
                            <th>"Amount"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>

            <footer class="expenses-page__footer">
                <span class="expenses-page__range">{move || state.with(ExpenseListState::range_label)}</span>
                <label>
                    "Rows per page"
                    <select prop:value=move || state.with(|s| s.size.to_string()) on:change=on_size>
                        {PAGE_SIZE_OPTIONS
                            .into_iter()
                            .map(|n| view! { <option value=n.to_string()>{n.to_string()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <Show when=move || state.with(ExpenseListState::show_pagination)>
                    <Pager
                        page=Signal::derive(move || state.with(|s| s.page))
                        total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                        can_prev=Signal::derive(move || state.with(ExpenseListState::can_prev))
                        can_next=Signal::derive(move || state.with(ExpenseListState::can_next))
                        on_prev=on_prev
                        on_next=on_next
                    />
                </Show>
            </footer>
        </div>
    }
}

#[component]
fn ExpenseRow(expense: Expense, on_delete: Callback<i64>) -> impl IntoView {
    let id = expense.id;
    let description = expense.description.clone().unwrap_or_default();
    let category = expense.category_name.clone().filter(|c| !c.is_empty());

    view! {
        <tr>
            <td>{format_date(&expense.date)}</td>
            <td>
                {description}
                {expense.receipt_mongo_id.is_some().then(|| view! { <span class="badge badge--receipt">"Receipt"</span> })}
            </td>
            <td>
                {match category {
                    Some(name) => view! { <span>{name}</span> }.into_any(),
                    None => view! { <span class="muted">"Uncategorized"</span> }.into_any(),
                }}
            </td>
            <td>{expense.tags.iter().map(|t| view! { <span class="tag">{t.clone()}</span> }).collect_view()}</td>
            <td class="expense-table__amount">{format_currency(expense.amount, &expense.currency)}</td>
            <td>
                <button class="expense-table__delete" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
