//! Registration page.
//!
//! A reply carrying a token signs the user straight in; otherwise they are
//! sent to `/login`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::Registration;
use crate::util::guard::{HOME_PATH, LOGIN_PATH};

const REGISTER_FAILED: &str = "Registration failed";

pub const ROLES: [&str; 4] = ["admin", "driver", "helper", "parent"];

#[derive(Clone, Debug, PartialEq, Eq)]
struct RegisterForm {
    name: String,
    email: String,
    password: String,
    phone: String,
    role: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            phone: String::new(),
            role: ROLES[0].to_owned(),
        }
    }
}

/// Trim text fields, require name/email/password, and keep the role to the
/// known set.
fn validate_registration(form: &RegisterForm) -> Result<Registration, &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    if name.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("Enter name, email, and password.");
    }
    if !ROLES.contains(&form.role.as_str()) {
        return Err("Choose a role.");
    }
    Ok(Registration {
        name: name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        phone: form.phone.trim().to_owned(),
        role: form.role.clone(),
    })
}

/// Where to go after a successful registration.
fn landing_path(token: Option<&str>) -> &'static str {
    if token.is_some() { HOME_PATH } else { LOGIN_PATH }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = match form.with_untracked(validate_registration) {
            Ok(registration) => registration,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let client = client.get_value();
            match api::register(&client, &registration).await {
                Ok(token) => {
                    if let Some(token) = &token {
                        client.session().set_token(token);
                    }
                    busy.set(false);
                    navigate(landing_path(token.as_deref()), NavigateOptions::default());
                }
                Err(err) => {
                    leptos::logging::warn!("registration failed: {err}");
                    error.set(Some(err.display_message(REGISTER_FAILED)));
                    busy.set(false);
                }
            }
        });
    };

    let text_input = move |label: &'static str, kind: &'static str, get: fn(&RegisterForm) -> String, set: fn(&mut RegisterForm, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </div>
        }
    };

    view! {
        <div class="auth-page">
            <h2>"Register"</h2>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <form class="auth-form" on:submit=on_submit>
                {text_input("Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {text_input("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                {text_input("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                {text_input("Phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                <div class="form-group">
                    <label>"Role"</label>
                    <select
                        prop:value=move || form.with(|f| f.role.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.role = value);
                        }
                    >
                        {ROLES.into_iter().map(|role| view! { <option value=role>{role}</option> }).collect::<Vec<_>>()}
                    </select>
                </div>
                <button type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
            </form>
            <p class="auth-switch">
                "Already registered? "
                <A href=LOGIN_PATH>"Login"</A>
            </p>
        </div>
    }
}
