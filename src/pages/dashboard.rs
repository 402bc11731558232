//! Dashboard page: 12-month overview, category split, and top expenses.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing screen. It walks every page of the
//! 12-month window once on mount and derives every widget from that list.

use leptos::prelude::*;

use crate::app::{expire_on_unauthorized, session_token};
use crate::components::charts::{BarChart, PieChart};
use crate::net::types::Expense;
use crate::state::auth::AuthState;
use crate::state::dashboard::{
    DashboardState, TOP_EXPENSES, average_per_month, category_breakdown, fetch_window, month_options,
    monthly_totals, top_expenses,
};
use crate::util::dates;
use crate::util::format::{format_currency, format_date};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(DashboardState::default());
    let today = dates::today();

    if let Some(token) = session_token(auth) {
        state.update(DashboardState::begin_load);
        let filters = fetch_window(today);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let page_size = crate::net::api::DASHBOARD_PAGE_SIZE;
            match crate::net::api::fetch_all_expenses(&token, &filters, page_size).await {
                Ok(expenses) => {
                    log::debug!("dashboard loaded {} expenses", expenses.len());
                    state.try_update(|s| s.finish_load(expenses));
                }
                Err(e) => {
                    leptos::logging::warn!("dashboard load failed: {e}");
                    if !expire_on_unauthorized(auth, &e) {
                        let message = e.user_message(crate::state::dashboard::LOAD_DASHBOARD_FAILED);
                        state.try_update(|s| s.fail_load(message));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, filters);
    }

    let monthly = Memo::new(move |_| state.with(|s| monthly_totals(&s.expenses, today)));
    let breakdown = Memo::new(move |_| state.with(|s| category_breakdown(&s.expenses, s.selected_month)));
    let top = Memo::new(move |_| state.with(|s| top_expenses(&s.expenses, TOP_EXPENSES)));

    let expense_count = move || state.with(|s| s.expenses.len());
    let month_total = move || breakdown.with(|(_, total)| format_currency(*total, "USD"));
    let average = move || monthly.with(|m| format_currency(average_per_month(m), "USD"));
    let selected_label = move || state.with(|s| s.selected_month.long_label());

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="form-error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p class="dashboard-page__loading">"Loading dashboard..."</p> }
            >
                <div class="summary-cards">
                    <div class="summary-card">
                        <span class="summary-card__label">"Total Expenses"</span>
                        <span class="summary-card__value">{expense_count}</span>
                    </div>
                    <div class="summary-card">
                        <span class="summary-card__label">{move || format!("{} Total", selected_label())}</span>
                        <span class="summary-card__value">{month_total}</span>
                    </div>
                    <div class="summary-card">
                        <span class="summary-card__label">"Average per Month"</span>
                        <span class="summary-card__value">{average}</span>
                    </div>
                </div>

                <section class="dashboard-page__chart">
                    <h2>"Monthly Expenses (Last 12 Months)"</h2>
                    <BarChart monthly=Signal::derive(move || monthly.get())/>
                </section>

                <section class="dashboard-page__chart">
                    <header class="dashboard-page__chart-header">
                        <h2>"Expenses by Category"</h2>
                        <select
                            prop:value=move || state.with(|s| s.selected_month.to_string())
                            on:change=move |ev| {
                                state.update(|s| {
                                    s.select_month(&event_target_value(&ev));
                                });
                            }
                        >
                            {month_options(today)
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                    </header>
                    <Show
                        when=move || breakdown.with(|(cats, _)| !cats.is_empty())
                        fallback=|| view! { <p>"No expenses for this month"</p> }
                    >
                        <PieChart
                            categories=Signal::derive(move || breakdown.with(|(cats, _)| cats.clone()))
                            total=Signal::derive(move || breakdown.with(|(_, total)| *total))
                        />
                    </Show>
                </section>

                <section class="dashboard-page__top">
                    <h2>"Top 5 Expenses"</h2>
                    <Show when=move || top.with(|t| !t.is_empty()) fallback=|| view! { <p>"No expenses yet"</p> }>
                        <ul class="top-expenses">
                            {move || top.get().into_iter().map(|expense| view! { <TopExpenseRow expense=expense/> }).collect_view()}
                        </ul>
                    </Show>
                </section>
            </Show>
        </div>
    }
}

#[component]
fn TopExpenseRow(expense: Expense) -> impl IntoView {
    let description = expense.description.clone().filter(|d| !d.is_empty()).unwrap_or_else(|| "No description".to_owned());
    let category = expense.category_name.clone().filter(|c| !c.is_empty());
    let has_receipt = expense.receipt_mongo_id.is_some();
    let tags = expense.tags.clone();

    view! {
        <li class="top-expenses__row">
            <div class="top-expenses__main">
                <span class="top-expenses__description">{description}</span>
                <span class="top-expenses__meta">
                    {format_date(&expense.date)}
                    {category.map(|c| view! { <span class="badge">{c}</span> })}
                    {has_receipt.then(|| view! { <span class="badge badge--receipt">"Receipt"</span> })}
                </span>
                <span class="top-expenses__tags">
                    {tags.into_iter().map(|t| view! { <span class="tag">{t}</span> }).collect_view()}
                </span>
            </div>
            <span class="top-expenses__amount">{format_currency(expense.amount, &expense.currency)}</span>
        </li>
    }
}
