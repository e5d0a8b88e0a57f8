use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::api;
use crate::net::http::Method;
use crate::net::testing::client_with_token;
use crate::state::panel::{self, PanelState};

#[test]
fn set_and_get_touch_one_field() {
    let mut form = BusForm::default();
    form.set(BusField::Capacity, "40".to_owned());
    assert_eq!(form.get(BusField::Capacity), "40");
    assert_eq!(form.get(BusField::BusNumber), "");
    assert_eq!(form, BusForm { capacity: "40".to_owned(), ..BusForm::default() });
}

#[test]
fn submit_b12_posts_resets_and_refetches() {
    let (client, transport) = client_with_token(Some("t"));
    transport
        .reply(200, serde_json::json!({ "_id": "b12" }))
        .reply(200, serde_json::json!([{ "_id": "b12", "busNumber": "B12", "capacity": 40 }]));
    let cell = RefCell::new(PanelState::default());
    let form = RefCell::new(BusForm { bus_number: "B12".to_owned(), capacity: "40".to_owned(), ..BusForm::default() });
    let body = form.borrow().clone();

    let ok = block_on(panel::mutate(
        &cell,
        CREATE,
        panel::no_prompt,
        api::create_bus(&client, &body),
        || *form.borrow_mut() = BusForm::default(),
        || api::fetch_buses(&client),
    ));

    assert!(ok);
    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(
        requests[0].body,
        Some(serde_json::json!({ "busNumber": "B12", "capacity": "40", "driverId": "", "helperId": "" }))
    );
    assert_eq!(transport.count(Method::Get, "/api/buses"), 1);
    assert_eq!(form.into_inner(), BusForm::default());
    let state = cell.into_inner();
    assert_eq!(state.items[0].bus_number, "B12");
    assert_eq!(state.success.as_deref(), Some("Bus added successfully"));
}

#[test]
fn failed_submit_keeps_form_for_retry() {
    let (client, transport) = client_with_token(Some("t"));
    transport.reply(400, serde_json::json!({ "message": "Bus number already exists" }));
    let cell = RefCell::new(PanelState::default());
    let typed = BusForm { bus_number: "B12".to_owned(), capacity: "40".to_owned(), ..BusForm::default() };
    let form = RefCell::new(typed.clone());

    let ok = block_on(panel::mutate(
        &cell,
        CREATE,
        panel::no_prompt,
        api::create_bus(&client, &typed),
        || *form.borrow_mut() = BusForm::default(),
        || api::fetch_buses(&client),
    ));

    assert!(!ok);
    assert_eq!(form.into_inner(), typed);
    assert_eq!(cell.borrow().error.as_deref(), Some("Bus number already exists"));
}

#[test]
fn delete_asks_the_bus_prompt() {
    let (client, transport) = client_with_token(Some("t"));
    let cell = RefCell::new(PanelState::default());
    let mut asked = None;

    block_on(panel::mutate(
        &cell,
        DELETE,
        |prompt: &str| {
            asked = Some(prompt.to_owned());
            true
        },
        api::delete_bus(&client, "b1"),
        || {},
        || api::fetch_buses(&client),
    ));

    assert_eq!(asked.as_deref(), Some("Are you sure you want to delete this bus?"));
    assert_eq!(transport.count(Method::Delete, "/api/buses/b1"), 1);
    assert_eq!(cell.borrow().success.as_deref(), Some("Bus deleted successfully"));
}
