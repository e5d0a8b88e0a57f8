//! Bus panel form and messages.

#[cfg(test)]
#[path = "buses_test.rs"]
mod buses_test;

use serde::Serialize;

use super::panel::Outcome;

pub const LOAD_FAILED: &str = "Error fetching buses";

pub const CREATE: Outcome = Outcome {
    failure: "Error adding bus",
    success: Some("Bus added successfully"),
    reload_failure: LOAD_FAILED,
    confirm: None,
};

pub const DELETE: Outcome = Outcome {
    failure: "Error deleting bus",
    success: Some("Bus deleted successfully"),
    reload_failure: LOAD_FAILED,
    confirm: Some("Are you sure you want to delete this bus?"),
};

/// Shown for a driver or helper that is missing or not populated.
pub const UNASSIGNED: &str = "Not assigned";

/// Create-bus form. Every field is posted as typed, including empty ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusForm {
    pub bus_number: String,
    pub capacity: String,
    pub driver_id: String,
    pub helper_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusField {
    BusNumber,
    Capacity,
    DriverId,
    HelperId,
}

impl BusForm {
    pub fn set(&mut self, field: BusField, value: String) {
        match field {
            BusField::BusNumber => self.bus_number = value,
            BusField::Capacity => self.capacity = value,
            BusField::DriverId => self.driver_id = value,
            BusField::HelperId => self.helper_id = value,
        }
    }

    pub fn get(&self, field: BusField) -> &str {
        match field {
            BusField::BusNumber => &self.bus_number,
            BusField::Capacity => &self.capacity,
            BusField::DriverId => &self.driver_id,
            BusField::HelperId => &self.helper_id,
        }
    }
}
