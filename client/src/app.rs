//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the one [`Session`] and [`ApiClient`] for the page lifetime and
//! provides both as context. The nav bar, the route guard, and every page read
//! them from there.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::components::nav_bar::{BRAND, SessionNav};
use crate::components::protected::Protected;
use crate::config::ClientConfig;
use crate::net::fetch::FetchTransport;
use crate::net::http::ApiClient;
use crate::pages::{
    buses::BusesPage, login::LoginPage, notifications::NotificationsPage, register::RegisterPage,
    students::StudentsPage,
};
use crate::state::session::Session;
use crate::util::guard::{AppRoute, HOME_PATH};
use crate::util::storage::LocalStorageTokenStore;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    leptos::logging::log!("api base: {:?}", config.api_base);
    let session = Session::new(Arc::new(LocalStorageTokenStore::new(config.token_key)));
    let client = ApiClient::new(config.api_base, session.clone(), Arc::new(FetchTransport));

    provide_context(session);
    provide_context(client);

    view! {
        <Title text=BRAND/>

        <Router>
            <div class="app">
                <SessionNav/>
                <div class="container">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route
                            path=StaticSegment("buses")
                            view=|| view! { <Protected route=AppRoute::Buses><BusesPage/></Protected> }
                        />
                        <Route
                            path=StaticSegment("students")
                            view=|| view! { <Protected route=AppRoute::Students><StudentsPage/></Protected> }
                        />
                        <Route
                            path=StaticSegment("notifications")
                            view=|| {
                                view! {
                                    <Protected route=AppRoute::Notifications>
                                        <NotificationsPage/>
                                    </Protected>
                                }
                            }
                        />
                        <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                    </Routes>
                </div>
            </div>
        </Router>
    }
}
