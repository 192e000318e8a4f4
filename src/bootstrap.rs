//! Startup sequence: database, router, listener.
//!
//! The database handle is closed on every path after it is opened,
//! including bind and server failures.

use std::future::Future;

use crate::config::AppConfig;
use crate::database::{Database, DatabaseHandle};
use crate::error::StartupError;
use crate::http;
use crate::routes::create_router;

/// Connect, bind and serve until `shutdown` resolves.
///
/// No listener is bound if the database connect fails.
pub async fn run<F>(config: &AppConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let database = Database::connect(&config.database).await?;
    serve_with(database, config, shutdown).await
}

/// Bind and serve while holding `database`, then close it whatever the
/// outcome.
pub async fn serve_with<D, F>(
    database: D,
    config: &AppConfig,
    shutdown: F,
) -> Result<(), StartupError>
where
    D: DatabaseHandle,
    F: Future<Output = ()> + Send + 'static,
{
    let result = serve(config, shutdown).await;
    database.close().await;
    result
}

async fn serve<F>(config: &AppConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router();
    let listener = http::bind_any(&config.http.bind_addrs()).await?;
    http::serve(listener, app, shutdown).await
}
