//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request building and the bearer header, `fetch` is the browser
//! transport, `api` names the endpoints, and `types` defines the wire schema.

pub mod api;
pub mod fetch;
pub mod http;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;
