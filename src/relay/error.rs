//! Relay error taxonomy.
//!
//! Every variant except [`RelayError::ResponseRead`] aborts the relay and is
//! reported to the caller as `500 Internal Server Error` with the message
//! produced by [`RelayError::caller_message`].

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that can occur while decoding or executing a call descriptor.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Inbound payload is not a valid call descriptor.
    #[error("{source}, body: {}", String::from_utf8_lossy(.raw))]
    Decode {
        #[source]
        source: serde_json::Error,
        /// The offending payload, kept for diagnostics.
        raw: Vec<u8>,
    },

    /// A required descriptor field is missing or empty.
    #[error("{0}")]
    InvalidRequest(&'static str),

    /// The descriptor body could not be serialized.
    #[error("body encode failed: {0}")]
    BodyEncode(#[source] serde_json::Error),

    /// The outbound request could not be built from the descriptor.
    #[error("build request ({method}, {url}, body: {}) failed: {reason}", display_body(.body))]
    RequestBuild {
        reason: String,
        method: String,
        url: String,
        body: Option<Vec<u8>>,
    },

    /// The outbound call did not complete.
    #[error("outbound call failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The outbound body could not be read. Logged only, never returned to the caller.
    #[error("read outbound body failed: {0}")]
    ResponseRead(#[source] reqwest::Error),
}

impl RelayError {
    /// Stable stage name used in messages, log fields and metric labels.
    pub fn stage(&self) -> &'static str {
        match self {
            RelayError::Decode { .. } => "decode",
            RelayError::InvalidRequest(_) => "invalid_request",
            RelayError::BodyEncode(_) => "body_encode",
            RelayError::RequestBuild { .. } => "request_build",
            RelayError::Transport(_) => "transport",
            RelayError::ResponseRead(_) => "response_read",
        }
    }

    /// Status reported to the inbound caller.
    ///
    /// All failures share one status family, so the caller can only tell a relay
    /// failure from an outbound 500 by the message text.
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Plain-text body written back to the inbound caller.
    pub fn caller_message(&self) -> String {
        format!("relay failed at {}: {}", self.stage(), self)
    }
}

fn display_body(body: &Option<Vec<u8>>) -> String {
    match body {
        Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        None => "none".to_string(),
    }
}
