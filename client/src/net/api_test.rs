use futures::executor::block_on;

use super::*;
use crate::net::testing::client_with_token;
use crate::state::students::{Axis, Stop};

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(bus_endpoint("b1"), "/api/buses/b1");
    assert_eq!(student_endpoint("s1"), "/api/students/s1");
    assert_eq!(student_status_endpoint("s1"), "/api/students/s1/status");
    assert_eq!(notification_endpoint("n1"), "/api/notifications/n1");
}

#[test]
fn create_bus_posts_every_form_field() {
    let (client, transport) = client_with_token(Some("t"));
    let form = BusForm { bus_number: "B12".to_owned(), capacity: "40".to_owned(), ..BusForm::default() };
    block_on(create_bus(&client, &form)).unwrap();

    let sent = &transport.requests()[0];
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "/api/buses");
    assert_eq!(
        sent.body,
        Some(serde_json::json!({ "busNumber": "B12", "capacity": "40", "driverId": "", "helperId": "" }))
    );
}

#[test]
fn create_student_posts_geojson_points() {
    let (client, transport) = client_with_token(Some("t"));
    let mut form = StudentForm { name: "Sam".to_owned(), parent_id: "p1".to_owned(), bus_id: "b1".to_owned(), ..StudentForm::default() };
    form.set_coordinate(Stop::Pickup, Axis::Latitude, "12.5");
    block_on(create_student(&client, &form)).unwrap();

    let body = transport.requests()[0].body.clone().unwrap();
    assert_eq!(body["name"], "Sam");
    assert_eq!(body["parentId"], "p1");
    assert_eq!(body["busId"], "b1");
    assert_eq!(body["pickupLocation"], serde_json::json!({ "type": "Point", "coordinates": [12.5, 0.0] }));
    assert_eq!(body["dropLocation"], serde_json::json!({ "type": "Point", "coordinates": [0.0, 0.0] }));
}

#[test]
fn status_update_puts_partial_body() {
    let (client, transport) = client_with_token(Some("t"));
    block_on(update_student_status(&client, "s1", StatusPatch::dropoff(true))).unwrap();
    let sent = &transport.requests()[0];
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.url, "/api/students/s1/status");
    assert_eq!(sent.body, Some(serde_json::json!({ "dropStatus": true })));
}

#[test]
fn mark_read_puts_empty_object() {
    let (client, transport) = client_with_token(Some("t"));
    block_on(mark_notification_read(&client, "n1")).unwrap();
    let sent = &transport.requests()[0];
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.url, "/api/notifications/n1");
    assert_eq!(sent.body, Some(serde_json::json!({})));
}

#[test]
fn deletes_carry_no_body() {
    let (client, transport) = client_with_token(Some("t"));
    block_on(delete_bus(&client, "b1")).unwrap();
    block_on(delete_student(&client, "s1")).unwrap();
    block_on(delete_notification(&client, "n1")).unwrap();
    let urls: Vec<_> = transport.requests().into_iter().map(|r| (r.method, r.url, r.body)).collect();
    assert_eq!(
        urls,
        vec![
            (Method::Delete, "/api/buses/b1".to_owned(), None),
            (Method::Delete, "/api/students/s1".to_owned(), None),
            (Method::Delete, "/api/notifications/n1".to_owned(), None),
        ]
    );
}

#[test]
fn login_returns_token_and_rejects_tokenless_reply() {
    let (client, transport) = client_with_token(None);
    let creds = Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() };

    transport.reply(200, serde_json::json!({ "token": "jwt-1" }));
    assert_eq!(block_on(login(&client, &creds)).unwrap(), "jwt-1");

    transport.reply(200, serde_json::json!({ "user": {} }));
    assert!(matches!(block_on(login(&client, &creds)), Err(ApiError::Decode(_))));

    transport.reply(401, serde_json::json!({ "message": "Invalid credentials" }));
    let err = block_on(login(&client, &creds)).unwrap_err();
    assert_eq!(err.display_message("Login failed"), "Invalid credentials");
}

#[test]
fn register_token_is_optional() {
    let (client, transport) = client_with_token(None);
    let reg = Registration {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
        phone: String::new(),
        role: "admin".to_owned(),
    };
    transport.reply(201, serde_json::json!({ "message": "created" }));
    assert_eq!(block_on(register(&client, &reg)).unwrap(), None);
    assert_eq!(transport.requests()[0].url, "/api/auth/register");
}
