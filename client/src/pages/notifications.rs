//! Notification list: mark read or delete, newest data from the server on
//! every change.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::banner::MessageBanner;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::Notification;
use crate::state::notifications;
use crate::state::panel::{self, PanelState};
use crate::util::time::display_timestamp;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());
    let panel = RwSignal::new(PanelState::<Notification>::default());

    spawn_local(async move {
        let client = client.get_value();
        panel::load(&panel, api::fetch_notifications(&client), notifications::LOAD_FAILED).await;
    });

    let on_mark_read = move |id: String| {
        spawn_local(async move {
            let client = client.get_value();
            panel::mutate(
                &panel,
                notifications::MARK_READ,
                panel::no_prompt,
                api::mark_notification_read(&client, &id),
                || {},
                || api::fetch_notifications(&client),
            )
            .await;
        });
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            let client = client.get_value();
            panel::mutate(
                &panel,
                notifications::DELETE,
                panel::no_prompt,
                api::delete_notification(&client, &id),
                || {},
                || api::fetch_notifications(&client),
            )
            .await;
        });
    };

    let pending = move || panel.with(|p| p.pending);
    let is_empty = move || panel.with(|p| p.items.is_empty());

    // Rows are rebuilt from the list on every change so a reload always shows
    // the server's current values.
    let notification_row = move |notification: &Notification| {
        let class = notifications::item_class(notification);
        let unread = notifications::can_mark_read(notification);
        let bus = notification.related_bus.as_ref().and_then(|r| r.label()).map(str::to_owned);
        let stamp = notification.created_at.as_deref().map(display_timestamp).unwrap_or_default();
        let read_id = notification.id.clone();
        let delete_id = notification.id.clone();
        view! {
            <div class=class>
                <div class="notification-content">
                    <p>{notification.message.clone()}</p>
                    <small>{stamp}</small>
                    {bus.map(|bus| view! { <small>"Bus: " {bus}</small> })}
                </div>
                <div class="notification-actions">
                    {unread.then(|| view! {
                        <button disabled=pending on:click=move |_| on_mark_read(read_id.clone())>
                            "Mark as Read"
                        </button>
                    })}
                    <button disabled=pending on:click=move |_| on_delete(delete_id.clone())>
                        "Delete"
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <div class="notifications">
            <h2>"Notifications"</h2>
            <MessageBanner
                error=Signal::derive(move || panel.with(|p| p.error.clone()))
                success=Signal::derive(move || panel.with(|p| p.success.clone()))
            />

            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="notifications-empty">{notifications::EMPTY}</p> }
            >
                <div class="notification-list">
                    {move || panel.with(|p| p.items.iter().map(notification_row).collect_view())}
                </div>
            </Show>
        </div>
    }
}
