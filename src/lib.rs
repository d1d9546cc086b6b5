//! Programmable single-hop HTTP relay library.
//!
//! A POSTed JSON call descriptor (`url`, `method`, `body`, `header`) is turned
//! into one outbound HTTP request; the outbound status and body are returned
//! verbatim to the caller.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::{CallDescriptor, HeaderField, RelayError, RelayExecutor, RelayResult};
