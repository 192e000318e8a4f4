use std::io;
use std::net::SocketAddr;

use crate::config::ConfigError;

/// Fatal startup and serving errors. Any of these ends the process nonzero.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to bind server on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server failed: {0}")]
    Server(#[source] io::Error),
}
