//! Build-time client configuration.
//!
//! The API base URL is baked into the bundle from `BUS_ADMIN_API_BASE` at
//! compile time. An empty base means requests go to the page's own origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every `/api/...` path, without a trailing slash.
    pub api_base: String,
    /// Storage key for the session token.
    pub token_key: &'static str,
}

impl ClientConfig {
    /// Build config from the compile-time environment.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("BUS_ADMIN_API_BASE"))
    }

    pub fn new(api_base: Option<&str>) -> Self {
        let api_base = api_base.unwrap_or_default().trim().trim_end_matches('/').to_owned();
        Self { api_base, token_key: TOKEN_KEY }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
