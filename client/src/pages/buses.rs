//! Bus management page: create form plus bus table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::banner::MessageBanner;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::{Bus, Labelled, Ref};
use crate::state::buses::{self, BusField, BusForm};
use crate::state::panel::{self, PanelState};
use crate::util::dialog;

#[component]
pub fn BusesPage() -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());
    let panel = RwSignal::new(PanelState::<Bus>::default());
    let form = RwSignal::new(BusForm::default());

    spawn_local(async move {
        let client = client.get_value();
        panel::load(&panel, api::fetch_buses(&client), buses::LOAD_FAILED).await;
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = form.get_untracked();
        spawn_local(async move {
            let client = client.get_value();
            panel::mutate(
                &panel,
                buses::CREATE,
                panel::no_prompt,
                api::create_bus(&client, &body),
                || form.set(BusForm::default()),
                || api::fetch_buses(&client),
            )
            .await;
        });
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            let client = client.get_value();
            panel::mutate(
                &panel,
                buses::DELETE,
                dialog::confirm,
                api::delete_bus(&client, &id),
                || {},
                || api::fetch_buses(&client),
            )
            .await;
        });
    };

    let pending = move || panel.with(|p| p.pending);
    let field = move |label: &'static str, kind: &'static str, which: BusField, required: bool| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type=kind
                    required=required
                    prop:value=move || form.with(|f| f.get(which).to_owned())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.set(which, value));
                    }
                />
            </div>
        }
    };

    // Rows are rebuilt from the list on every change so a reload always shows
    // the server's current values.
    let bus_row = move |bus: &Bus| {
        let id = bus.id.clone();
        view! {
            <tr>
                <td>{bus.bus_number.clone()}</td>
                <td>{bus.capacity.map(|c| c.to_string()).unwrap_or_default()}</td>
                <td>{bus.status.clone().unwrap_or_default()}</td>
                <td>{staff_label(bus.driver_id.as_ref())}</td>
                <td>{staff_label(bus.helper_id.as_ref())}</td>
                <td>
                    <button disabled=pending on:click=move |_| on_delete(id.clone())>
                        "Delete"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="bus-management">
            <h2>"Bus Management"</h2>
            <MessageBanner
                error=Signal::derive(move || panel.with(|p| p.error.clone()))
                success=Signal::derive(move || panel.with(|p| p.success.clone()))
            />

            <form class="bus-form" on:submit=on_submit>
                {field("Bus Number", "text", BusField::BusNumber, true)}
                {field("Capacity", "number", BusField::Capacity, true)}
                {field("Driver ID", "text", BusField::DriverId, false)}
                {field("Helper ID", "text", BusField::HelperId, false)}
                <button type="submit" disabled=pending>
                    "Add Bus"
                </button>
            </form>

            <div class="bus-list">
                <h3>"Buses"</h3>
                <table>
                    <thead>
                        <tr>
                            <th>"Bus Number"</th>
                            <th>"Capacity"</th>
                            <th>"Status"</th>
                            <th>"Driver"</th>
                            <th>"Helper"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || panel.with(|p| p.items.iter().map(bus_row).collect_view())}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn staff_label<T: Labelled>(staff: Option<&Ref<T>>) -> String {
    staff
        .and_then(Ref::label)
        .unwrap_or(buses::UNASSIGNED)
        .to_owned()
}
