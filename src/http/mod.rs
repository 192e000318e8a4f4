//! HTTP server module.
//!
//! Plain HTTP only; TLS is expected to terminate in front of the service.
//! The server includes:
//! - Fail-fast bind with a typed error, falling back across address families
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use server::{bind, bind_any, serve};
pub use shutdown::shutdown_signal;
