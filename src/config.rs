//! Host configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_DIST_DIR: &str = "client/dist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BUS_ADMIN_BIND`: default `0.0.0.0`
    /// - `BUS_ADMIN_DIST_DIR`: compiled client bundle, default `client/dist`
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| HostError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let bind = match non_empty(lookup("BUS_ADMIN_BIND")) {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| HostError::InvalidBind(raw))?,
            None => DEFAULT_BIND,
        };
        let dist_dir = non_empty(lookup("BUS_ADMIN_DIST_DIR")).map_or_else(|| PathBuf::from(DEFAULT_DIST_DIR), PathBuf::from);

        Ok(Self { bind, port, dist_dir })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
