//! Student management page: create form with pickup/drop coordinates, student
//! table with status checkboxes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::banner::MessageBanner;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::Student;
use crate::state::panel::{self, PanelState};
use crate::state::students::{self, Axis, Stop, StudentField, StudentForm};
use crate::util::dialog;

#[component]
pub fn StudentsPage() -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());
    let panel = RwSignal::new(PanelState::<Student>::default());
    let form = RwSignal::new(StudentForm::default());

    spawn_local(async move {
        let client = client.get_value();
        panel::load(&panel, api::fetch_students(&client), students::LOAD_FAILED).await;
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = form.get_untracked();
        spawn_local(async move {
            let client = client.get_value();
            panel::mutate(
                &panel,
                students::CREATE,
                panel::no_prompt,
                api::create_student(&client, &body),
                || form.set(StudentForm::default()),
                || api::fetch_students(&client),
            )
            .await;
        });
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            let client = client.get_value();
            panel::mutate(
                &panel,
                students::DELETE,
                dialog::confirm,
                api::delete_student(&client, &id),
                || {},
                || api::fetch_students(&client),
            )
            .await;
        });
    };

    let on_toggle = move |student: Student, stop: Stop| {
        let patch = students::toggle_patch(&student, stop);
        spawn_local(async move {
            let client = client.get_value();
            let ok = panel::mutate(
                &panel,
                students::UPDATE_STATUS,
                panel::no_prompt,
                api::update_student_status(&client, &student.id, patch),
                || {},
                || api::fetch_students(&client),
            )
            .await;
            if !ok {
                // The browser already flipped the box; redraw it from the list.
                panel.update(|_| {});
            }
        });
    };

    let pending = move || panel.with(|p| p.pending);

    let text_field = move |label: &'static str, which: StudentField, required: bool| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type="text"
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

    let coordinate_field = move |label: &'static str, stop: Stop, axis: Axis| {
        let draft = RwSignal::new(form.with_untracked(|f| f.coordinate(stop, axis).to_string()));
        Effect::new(move |_| {
            let value = form.with(|f| f.coordinate(stop, axis));
            if !draft.with_untracked(|d| students::draft_matches(d, value)) {
                draft.set(value.to_string());
            }
        });
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type="number"
                    step="any"
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        // Untracked: the input already shows what was typed.
                        draft.update_untracked(|d| d.clone_from(&raw));
                        form.maybe_update(|f| f.set_coordinate(stop, axis, &raw));
                    }
                />
            </div>
        }
    };

    // Rows are rebuilt from the list on every change so a reload always shows
    // the server's current values.
    let student_row = move |student: &Student| {
        let id = student.id.clone();
        let parent = student.parent_id.as_ref().and_then(|r| r.label()).unwrap_or_default().to_owned();
        let bus = student.bus_id.as_ref().and_then(|r| r.label()).unwrap_or_default().to_owned();
        let checkbox = move |stop: Stop| {
            let id = id.clone();
            let toggled = student.clone();
            view! {
                <input
                    type="checkbox"
                    prop:checked=move || panel.with(|p| students::status_of(&p.items, &id, stop))
                    disabled=pending
                    on:change=move |_| on_toggle(toggled.clone(), stop)
                />
            }
        };
        let delete_id = student.id.clone();
        view! {
            <tr>
                <td>{student.name.clone()}</td>
                <td>{parent}</td>
                <td>{bus}</td>
                <td>{checkbox(Stop::Pickup)}</td>
                <td>{checkbox(Stop::Drop)}</td>
                <td>
                    <button disabled=pending on:click=move |_| on_delete(delete_id.clone())>
                        "Delete"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="student-management">
            <h2>"Student Management"</h2>
            <MessageBanner
                error=Signal::derive(move || panel.with(|p| p.error.clone()))
                success=Signal::derive(move || panel.with(|p| p.success.clone()))
            />

            <form class="student-form" on:submit=on_submit>
                {text_field("Name", StudentField::Name, true)}
                {text_field("Parent ID", StudentField::ParentId, true)}
                {text_field("Bus ID", StudentField::BusId, true)}
                <fieldset>
                    <legend>"Pickup Location"</legend>
                    {coordinate_field("Latitude", Stop::Pickup, Axis::Latitude)}
                    {coordinate_field("Longitude", Stop::Pickup, Axis::Longitude)}
                </fieldset>
                <fieldset>
                    <legend>"Drop Location"</legend>
                    {coordinate_field("Latitude", Stop::Drop, Axis::Latitude)}
                    {coordinate_field("Longitude", Stop::Drop, Axis::Longitude)}
                </fieldset>
                <button type="submit" disabled=pending>
                    "Add Student"
                </button>
            </form>

            <div class="student-list">
                <h3>"Students"</h3>
                <table>
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Parent"</th>
                            <th>"Bus"</th>
                            <th>"Pickup Status"</th>
                            <th>"Drop Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || panel.with(|p| p.items.iter().map(student_row).collect_view())}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
