//! HTTP server startup logic.

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::error::StartupError;

/// Bind the listener. Fails immediately if the address is unavailable.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, StartupError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

/// Bind the first address in `addrs` that works.
///
/// An address already in use stops the search: with a dual-stack wildcard
/// the IPv4 fallback would be taken too, and the port is what the operator
/// asked for. Any other failure (no IPv6 on the host, address not local)
/// moves on to the next candidate.
pub async fn bind_any(addrs: &[SocketAddr]) -> Result<TcpListener, StartupError> {
    let mut last_error = None;

    for &addr in addrs {
        match bind(addr).await {
            Ok(listener) => return Ok(listener),
            Err(StartupError::Bind { source, .. }) if source.kind() == io::ErrorKind::AddrInUse => {
                return Err(StartupError::Bind { addr, source });
            }
            Err(e) => {
                tracing::debug!(%addr, error = %e, "Bind failed, trying next address");
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        StartupError::Server(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no address to bind",
        ))
    }))
}

/// Serve `app` on `listener` until `shutdown` resolves.
///
/// In-flight requests are drained before this returns.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().map_err(StartupError::Server)?;
    tracing::info!(%addr, "Payroll service starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(StartupError::Server)?;

    tracing::info!("Server stopped");
    Ok(())
}
