//! Login page: email + password exchanged for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::Credentials;
use crate::util::guard::HOME_PATH;

pub(crate) const LOGIN_FAILED: &str = "Login failed";
const MISSING_FIELDS: &str = "Enter both email and password.";

/// Trim the email and require both fields.
fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let client = client.get_value();
            match api::login(&client, &credentials).await {
                Ok(token) => {
                    client.session().set_token(&token);
                    busy.set(false);
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    error.set(Some(err.display_message(LOGIN_FAILED)));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <h2>"Login"</h2>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <form class="auth-form" on:submit=on_submit>
                <div class="form-group">
                    <label>"Email"</label>
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Password"</label>
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" disabled=move || busy.get()>
                    "Login"
                </button>
            </form>
            <p class="auth-switch">
                "No account? "
                <A href="/register">"Register"</A>
            </p>
        </div>
    }
}
