//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` holds the bearer token; `panel` is the list + form contract
//! every resource page follows; the resource modules carry each page's form
//! and messages.

pub mod buses;
pub mod notifications;
pub mod panel;
pub mod session;
pub mod students;
