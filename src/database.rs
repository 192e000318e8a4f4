//! PostgreSQL connection handle.
//!
//! The pool is opened once at startup and held until shutdown. Nothing
//! queries it yet; opening it eagerly makes an unreachable database a
//! startup failure instead of a first-request failure.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// A resource acquired at startup that must be released before exit.
#[async_trait]
pub trait DatabaseHandle: Send {
    /// Release the resource. Takes `self` so it can only happen once.
    async fn close(self);
}

pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open the pool and establish one connection.
    ///
    /// Fails once `connect_timeout` elapses without a connection.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = config.connect_options()?;

        tracing::info!(
            host = %options.get_host(),
            port = options.get_port(),
            database = options.get_database().unwrap_or_default(),
            timeout_secs = config.connect_timeout.as_secs(),
            "Connecting to database"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database");
        Ok(Self { pool })
    }
}

#[async_trait]
impl DatabaseHandle for Database {
    async fn close(self) {
        self.pool.close().await;
        tracing::info!("Database connection closed");
    }
}
