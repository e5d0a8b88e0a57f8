//! Notification panel messages and display helpers.
//!
//! Notifications are created elsewhere; this panel only marks them read or
//! deletes them. Delete does not prompt.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use super::panel::Outcome;
use crate::net::types::Notification;

pub const LOAD_FAILED: &str = "Error fetching notifications";

pub const MARK_READ: Outcome = Outcome {
    failure: "Error marking notification as read",
    success: None,
    reload_failure: LOAD_FAILED,
    confirm: None,
};

pub const DELETE: Outcome = Outcome {
    failure: "Error deleting notification",
    success: None,
    reload_failure: LOAD_FAILED,
    confirm: None,
};

pub const EMPTY: &str = "No notifications";

/// CSS classes for one list entry: the lower-cased type tag plus read state.
pub fn item_class(notification: &Notification) -> String {
    let read = if notification.is_read { "read" } else { "unread" };
    let kind = notification.kind.trim().to_lowercase();
    if kind.is_empty() {
        format!("notification-item {read}")
    } else {
        format!("notification-item {kind} {read}")
    }
}

/// Only unread entries offer "Mark as Read".
pub fn can_mark_read(notification: &Notification) -> bool {
    !notification.is_read
}
