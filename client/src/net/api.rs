//! Typed REST calls for buses, students, notifications, and auth.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; panels decide how a failure is
//! shown. Nothing here logs or retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiClient, ApiError, Method};
use super::types::{AuthReply, Bus, Credentials, Notification, Registration, StatusPatch, Student};
use crate::state::buses::BusForm;
use crate::state::students::StudentForm;

pub const BUSES_PATH: &str = "/api/buses";
pub const STUDENTS_PATH: &str = "/api/students";
pub const NOTIFICATIONS_PATH: &str = "/api/notifications";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";

fn bus_endpoint(id: &str) -> String {
    format!("{BUSES_PATH}/{id}")
}

fn student_endpoint(id: &str) -> String {
    format!("{STUDENTS_PATH}/{id}")
}

fn student_status_endpoint(id: &str) -> String {
    format!("{STUDENTS_PATH}/{id}/status")
}

fn notification_endpoint(id: &str) -> String {
    format!("{NOTIFICATIONS_PATH}/{id}")
}

pub async fn fetch_buses(client: &ApiClient) -> Result<Vec<Bus>, ApiError> {
    client.get_json(BUSES_PATH).await
}

pub async fn create_bus(client: &ApiClient, form: &BusForm) -> Result<(), ApiError> {
    client.send_json(Method::Post, BUSES_PATH, form).await
}

pub async fn delete_bus(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&bus_endpoint(id)).await
}

pub async fn fetch_students(client: &ApiClient) -> Result<Vec<Student>, ApiError> {
    client.get_json(STUDENTS_PATH).await
}

pub async fn create_student(client: &ApiClient, form: &StudentForm) -> Result<(), ApiError> {
    client.send_json(Method::Post, STUDENTS_PATH, form).await
}

pub async fn delete_student(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&student_endpoint(id)).await
}

pub async fn update_student_status(client: &ApiClient, id: &str, patch: StatusPatch) -> Result<(), ApiError> {
    client.send_json(Method::Put, &student_status_endpoint(id), &patch).await
}

pub async fn fetch_notifications(client: &ApiClient) -> Result<Vec<Notification>, ApiError> {
    client.get_json(NOTIFICATIONS_PATH).await
}

/// Mark read: `PUT` with an empty JSON object.
pub async fn mark_notification_read(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client
        .send_json(Method::Put, &notification_endpoint(id), &serde_json::json!({}))
        .await
}

pub async fn delete_notification(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&notification_endpoint(id)).await
}

/// Exchange credentials for a token.
///
/// # Errors
///
/// Fails like any request, and with [`ApiError::Decode`] when a 2xx reply
/// has no token.
pub async fn login(client: &ApiClient, credentials: &Credentials) -> Result<String, ApiError> {
    let reply: AuthReply = client.post_public(LOGIN_PATH, credentials).await?;
    reply
        .token
        .ok_or_else(|| ApiError::Decode("login reply has no token".to_owned()))
}

/// Create an account. Some deployments sign the user in immediately and
/// return a token; others expect a separate login.
pub async fn register(client: &ApiClient, registration: &Registration) -> Result<Option<String>, ApiError> {
    let reply: AuthReply = client.post_public(REGISTER_PATH, registration).await?;
    Ok(reply.token)
}
