//! Student panel form, coordinate editing, and messages.
//!
//! DESIGN
//! ======
//! Pickup and drop are two independent `[lat, long]` pairs starting at
//! `[0, 0]`. Editing one axis writes only that slot. Values are plain `f64`
//! with no range check; text that does not parse to a finite number leaves
//! the slot as it was.
//!
//! The page keeps the typed text of each coordinate input as a draft next to
//! the form, so partial input like `-` or an empty box stays on screen. The
//! draft is only overwritten when the form value moves away from it (a reset
//! after a successful create).

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use serde::Serialize;

use super::panel::Outcome;
use crate::net::types::{GeoPoint, StatusPatch, Student};

pub const LOAD_FAILED: &str = "Error fetching students";

pub const CREATE: Outcome = Outcome {
    failure: "Error adding student",
    success: Some("Student added successfully"),
    reload_failure: LOAD_FAILED,
    confirm: None,
};

pub const DELETE: Outcome = Outcome {
    failure: "Error deleting student",
    success: Some("Student deleted successfully"),
    reload_failure: LOAD_FAILED,
    confirm: Some("Are you sure you want to delete this student?"),
};

pub const UPDATE_STATUS: Outcome = Outcome {
    failure: "Error updating status",
    success: None,
    reload_failure: LOAD_FAILED,
    confirm: None,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stop {
    Pickup,
    Drop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn slot(self) -> usize {
        match self {
            Self::Latitude => 0,
            Self::Longitude => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudentField {
    Name,
    ParentId,
    BusId,
}

/// Create-student form, serialized as the POST body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentForm {
    pub name: String,
    pub parent_id: String,
    pub bus_id: String,
    pub pickup_location: GeoPoint,
    pub drop_location: GeoPoint,
}

impl StudentForm {
    pub fn set(&mut self, field: StudentField, value: String) {
        match field {
            StudentField::Name => self.name = value,
            StudentField::ParentId => self.parent_id = value,
            StudentField::BusId => self.bus_id = value,
        }
    }

    pub fn get(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.name,
            StudentField::ParentId => &self.parent_id,
            StudentField::BusId => &self.bus_id,
        }
    }

    pub fn coordinate(&self, stop: Stop, axis: Axis) -> f64 {
        self.point(stop).coordinates[axis.slot()]
    }

    /// Parse `raw` into one slot. Returns `false` and changes nothing when
    /// `raw` is not a finite number.
    pub fn set_coordinate(&mut self, stop: Stop, axis: Axis, raw: &str) -> bool {
        let Some(value) = parse_coordinate(raw) else {
            return false;
        };
        self.point_mut(stop).coordinates[axis.slot()] = value;
        true
    }

    fn point(&self, stop: Stop) -> &GeoPoint {
        match stop {
            Stop::Pickup => &self.pickup_location,
            Stop::Drop => &self.drop_location,
        }
    }

    fn point_mut(&mut self, stop: Stop) -> &mut GeoPoint {
        match stop {
            Stop::Pickup => &mut self.pickup_location,
            Stop::Drop => &mut self.drop_location,
        }
    }
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whether the coordinate input's typed `draft` already stands for `value`.
/// When it does not, the page replaces the draft with the form value.
pub fn draft_matches(draft: &str, value: f64) -> bool {
    parse_coordinate(draft) == Some(value)
}

/// Stored status for one student, as the checkbox should show it.
pub fn status_of(items: &[Student], id: &str, stop: Stop) -> bool {
    items.iter().find(|s| s.id == id).is_some_and(|s| match stop {
        Stop::Pickup => s.pickup_status,
        Stop::Drop => s.drop_status,
    })
}

/// Patch that flips one status checkbox for `student`.
pub fn toggle_patch(student: &Student, stop: Stop) -> StatusPatch {
    match stop {
        Stop::Pickup => StatusPatch::pickup(!student.pickup_status),
        Stop::Drop => StatusPatch::dropoff(!student.drop_status),
    }
}
