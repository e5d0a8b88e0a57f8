//! Top navigation bar with resource links and logout.
//!
//! The parent decides whether the bar mounts at all (session present); the
//! bar itself is presentation plus the logout handler.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::Session;
use crate::util::guard::{AppRoute, LOGIN_PATH};

pub const BRAND: &str = "Bus Tracking System";

/// Links shown in the bar, in display order.
pub const NAV_LINKS: [(AppRoute, &str); 3] = [
    (AppRoute::Buses, "Buses"),
    (AppRoute::Students, "Students"),
    (AppRoute::Notifications, "Notifications"),
];

fn link_class(link: AppRoute, pathname: &str) -> &'static str {
    if AppRoute::from_path(pathname) == Some(link) { "nav-link active" } else { "nav-link" }
}

/// Mounts [`NavBar`] only while a token is stored. Re-evaluated on every
/// navigation, not reactively on storage changes.
#[component]
pub fn SessionNav() -> impl IntoView {
    let session = expect_context::<Session>();
    let pathname = use_location().pathname;

    move || {
        pathname.track();
        session.is_authenticated().then(|| view! { <NavBar/> })
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<Session>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.clear();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="navigation">
            <div class="nav-brand">{BRAND}</div>
            <ul class="nav-links">
                {NAV_LINKS
                    .into_iter()
                    .map(|(route, label)| {
                        view! {
                            <li class=move || link_class(route, &pathname.get())>
                                <A href=route.path()>{label}</A>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
                <li>
                    <button class="logout-btn" on:click=on_logout>
                        "Logout"
                    </button>
                </li>
            </ul>
        </nav>
    }
}
