//! Host start-up and serve errors.

use std::io;
use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BUS_ADMIN_BIND: {0}")]
    InvalidBind(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] io::Error),
}
