//! Wire DTOs for the bus tracking REST API.
//!
//! DESIGN
//! ======
//! Records mirror the server's camelCase JSON with a Mongo-style `_id`.
//! Reference fields arrive either as a bare id or as a populated object, so
//! they deserialize through [`Ref`]. Unknown fields are ignored and an explicit
//! `null` in a displayed text or flag field reads as its default, so one odd
//! record never fails a whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A reference to another record: populated, or just its id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Populated(T),
    Id(String),
}

/// Records that have a human-facing label when populated.
pub trait Labelled {
    fn label(&self) -> &str;
}

impl<T: Labelled> Ref<T> {
    /// Populated label, or `None` for a bare id.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Populated(inner) => Some(inner.label()).filter(|l| !l.is_empty()),
            Self::Id(_) => None,
        }
    }
}

/// Populated driver, helper, or parent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl Labelled for Person {
    fn label(&self) -> &str {
        &self.name
    }
}

/// Populated bus reference on students and notifications.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bus_number: String,
}

impl Labelled for BusSummary {
    fn label(&self) -> &str {
        &self.bus_number
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bus_number: String,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub driver_id: Option<Ref<Person>>,
    #[serde(default)]
    pub helper_id: Option<Ref<Person>>,
}

/// GeoJSON point. `coordinates[0]` is edited as latitude, `[1]` as longitude.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type", default = "point_kind")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn origin() -> Self {
        Self { kind: point_kind(), coordinates: [0.0, 0.0] }
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self::origin()
    }
}

fn point_kind() -> String {
    "Point".to_owned()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<Ref<Person>>,
    #[serde(default)]
    pub bus_id: Option<Ref<BusSummary>>,
    /// Kept as sent; the table never shows locations, and unset ones arrive
    /// as `{"coordinates": []}`.
    #[serde(default)]
    pub pickup_location: Option<serde_json::Value>,
    #[serde(default)]
    pub drop_location: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pickup_status: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub drop_status: bool,
}

/// Partial status update for `PUT /api/students/:id/status`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_status: Option<bool>,
}

impl StatusPatch {
    pub fn pickup(value: bool) -> Self {
        Self { pickup_status: Some(value), drop_status: None }
    }

    pub fn dropoff(value: bool) -> Self {
        Self { pickup_status: None, drop_status: Some(value) }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// Free-form type tag (e.g. `"DELAY"`, `"Info"`).
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_read: bool,
    #[serde(default)]
    pub related_bus: Option<Ref<BusSummary>>,
    /// Server timestamp as sent (ISO-8601 in practice).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: String,
}

/// Reply from the auth endpoints. Extra fields (user profile) are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthReply {
    #[serde(default)]
    pub token: Option<String>,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept `40`, `"40"`, or `null` for numeric fields the form posts as text.
fn deserialize_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
