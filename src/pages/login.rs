//! Login page: email and password against `/auth/login`.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::validation::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|a| a.loading) {
            return;
        }
        let request = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        auth.update(|a| a.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&request).await {
                Ok(resp) => {
                    log::info!("signed in as {}", resp.email);
                    password.set(String::new());
                    auth.update(|a| a.sign_in(resp));
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    let message = match e {
                        crate::net::error::ApiError::Unauthorized => "Invalid email or password".to_owned(),
                        other => other.user_message("Login failed. Please try again."),
                    };
                    error.set(Some(message));
                    auth.update(|a| a.loading = false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Expense Tracker"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || auth.with(|a| a.loading)>
                        {move || if auth.with(|a| a.loading) { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || error.with(Option::is_some)>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
