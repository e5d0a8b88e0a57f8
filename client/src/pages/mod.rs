//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, form state,
//! submit handlers) and delegates list/message rendering to `components`.

pub mod buses;
pub mod login;
pub mod notifications;
pub mod register;
pub mod students;
