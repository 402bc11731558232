//! New-expense form: optional receipt upload, then create.

#[cfg(test)]
#[path = "expense_form_test.rs"]
mod expense_form_test;

use leptos::prelude::*;

use crate::app::{expire_on_unauthorized, session_token};
use crate::net::types::{Category, Expense};
use crate::state::auth::AuthState;
use crate::util::file::SelectedFile;
use crate::util::format::SUPPORTED_CURRENCIES;
use crate::util::validation::{ExpenseFormInput, FieldError, error_for, validate_expense_form};

pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload receipt. Please try again.";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create expense. Please try again.";

/// Where a submission currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    UploadingReceipt,
    Creating,
}

impl SubmitPhase {
    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Create Expense",
            Self::UploadingReceipt => "Uploading receipt...",
            Self::Creating => "Creating...",
        }
    }
}

/// First step of a valid submission: upload when a receipt is attached.
pub fn first_phase(input: &ExpenseFormInput) -> SubmitPhase {
    if input.receipt.is_some() { SubmitPhase::UploadingReceipt } else { SubmitPhase::Creating }
}

#[component]
pub fn ExpenseForm(
    #[prop(into)] categories: Signal<Vec<Category>>,
    on_success: Callback<Expense>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let input = RwSignal::new(ExpenseFormInput::default());
    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let submit_error = RwSignal::new(None::<String>);
    let phase = RwSignal::new(SubmitPhase::Idle);

    let field_error = move |field: &'static str| {
        move || field_errors.with(|errs| error_for(errs, field)).map(|msg| view! { <p class="field-error">{msg}</p> })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_busy() {
            return;
        }
        let form = input.get_untracked();
        let draft = match validate_expense_form(&form) {
            Ok(draft) => draft,
            Err(errs) => {
                field_errors.set(errs);
                return;
            }
        };
        field_errors.set(Vec::new());
        submit_error.set(None);
        let Some(token) = session_token(auth) else {
            return;
        };
        phase.set(first_phase(&form));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let mut receipt_id = None;
            if let Some(file) = form.receipt.as_ref() {
                match crate::net::api::upload_receipt(&token, file, None).await {
                    Ok(receipt) => receipt_id = Some(receipt.id),
                    Err(e) => {
                        leptos::logging::warn!("receipt upload failed: {e}");
                        if !expire_on_unauthorized(auth, &e) {
                            submit_error.set(Some(UPLOAD_FAILED_MESSAGE.to_owned()));
                        }
                        phase.set(SubmitPhase::Idle);
                        return;
                    }
                }
            }
            phase.set(SubmitPhase::Creating);
            match crate::net::api::create_expense(&token, &draft.into_create(receipt_id)).await {
                Ok(expense) => {
                    log::info!("created expense {}", expense.id);
                    phase.set(SubmitPhase::Idle);
                    on_success.run(expense);
                }
                Err(e) => {
                    leptos::logging::warn!("create expense failed: {e}");
                    if !expire_on_unauthorized(auth, &e) {
                        submit_error.set(Some(e.form_message(CREATE_FAILED_MESSAGE)));
                    }
                    phase.set(SubmitPhase::Idle);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, token, on_success);
    };

    let on_receipt_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        let file = SelectedFile::from_input_event(&ev);
        #[cfg(not(feature = "hydrate"))]
        let file = {
            let _ = ev;
            None::<SelectedFile>
        };
        input.update(|i| i.receipt = file);
    };

    view! {
        <form class="expense-form" on:submit=on_submit>
            <Show when=move || submit_error.with(Option::is_some)>
                <p class="form-error">{move || submit_error.get().unwrap_or_default()}</p>
            </Show>

            <label>
                "Amount"
                <input
                    type="number"
                    step="0.01"
                    min="0.01"
                    prop:value=move || input.with(|i| i.amount.clone())
                    on:input=move |ev| input.update(|i| i.amount = event_target_value(&ev))
                />
            </label>
            {field_error("amount")}

            <label>
                "Currency"
                <select
                    prop:value=move || input.with(|i| i.currency.clone())
                    on:change=move |ev| input.update(|i| i.currency = event_target_value(&ev))
                >
                    {SUPPORTED_CURRENCIES
                        .into_iter()
                        .map(|(code, label)| view! { <option value=code>{label}</option> })
                        .collect_view()}
                </select>
            </label>
            {field_error("currency")}

            <label>
                "Date"
                <input
                    type="date"
                    prop:value=move || input.with(|i| i.date.clone())
                    on:input=move |ev| input.update(|i| i.date = event_target_value(&ev))
                />
            </label>
            {field_error("date")}

            <label>
                "Category"
                <select
                    prop:value=move || input.with(|i| i.category_id.clone())
                    on:change=move |ev| input.update(|i| i.category_id = event_target_value(&ev))
                >
                    <option value="">"Select a category"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                            .collect_view()
                    }}
                </select>
            </label>

            <label>
                "Description"
                <textarea
                    rows="3"
                    prop:value=move || input.with(|i| i.description.clone())
                    on:input=move |ev| input.update(|i| i.description = event_target_value(&ev))
                ></textarea>
            </label>
            {field_error("description")}

            <label>
                "Tags"
                <input
                    type="text"
                    placeholder="e.g. business, travel"
                    prop:value=move || input.with(|i| i.tags.clone())
                    on:input=move |ev| input.update(|i| i.tags = event_target_value(&ev))
                />
            </label>

            <label>
                "Receipt (optional)"
                <input type="file" accept="image/*,.pdf" on:change=on_receipt_change/>
            </label>
            {field_error("receipt")}

            <div class="expense-form__actions">
                <button type="submit" disabled=move || phase.get().is_busy()>
                    {move || phase.get().label()}
                </button>
                <button type="button" disabled=move || phase.get().is_busy() on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
