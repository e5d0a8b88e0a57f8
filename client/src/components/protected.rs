//! Route wrapper that applies the session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each protected `<Route>` wraps its page in `<Protected>`. The guard runs
//! when the route view renders, which the router does on every navigation.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::Session;
use crate::util::guard::{AppRoute, Decision, decide};

/// Render `children` when the session allows `route`, else redirect.
#[component]
pub fn Protected(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();

    match decide(route, session.is_authenticated()) {
        Decision::Render => children().into_any(),
        Decision::Redirect(path) => {
            leptos::logging::log!("guard redirect: {} -> {path}", route.path());
            view! { <Redirect path=path/> }.into_any()
        }
    }
}
