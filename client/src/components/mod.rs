//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, route guard, message
//! banners) while reading the session and API client from Leptos context.

pub mod banner;
pub mod nav_bar;
pub mod protected;
