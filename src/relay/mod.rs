//! Relay core.
//!
//! # Data Flow
//! ```text
//! inbound body bytes
//!     → descriptor.rs (decode into CallDescriptor)
//!     → executor.rs (method check, body encode, request build)
//!     → headers.rs (fan out descriptor headers)
//!     → outbound call via shared reqwest::Client
//!     → RelayResult { status, body } or RelayError
//! ```
//!
//! # Design Decisions
//! - Descriptors and results are request-local; the client is the only shared state
//! - No retries, no timeouts beyond the client defaults
//! - Header values are a closed enum, so unsupported shapes are skipped explicitly

pub mod descriptor;
pub mod error;
pub mod executor;
pub mod headers;

pub use descriptor::{decode, CallDescriptor, HeaderField};
pub use error::RelayError;
pub use executor::{RelayExecutor, RelayResult};
