//! Mapping relay outcomes to HTTP responses.
//!
//! # Design Decisions
//! - Success: outbound status and body verbatim, no outbound headers copied
//! - Failure: 500 with a plain-text diagnostic naming the failed stage

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::relay::{RelayError, RelayResult};

/// Fixed body returned for any inbound method other than POST.
pub const ONLY_POST_MESSAGE: &str = "only POST method is accepted";

impl IntoResponse for RelayResult {
    fn into_response(self) -> Response {
        let body = self.body.map(Body::from).unwrap_or_else(Body::empty);
        (self.status, body).into_response()
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), self.caller_message()).into_response()
    }
}

/// Response for a non-POST inbound request.
pub fn method_rejected() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, ONLY_POST_MESSAGE).into_response()
}

/// Response for an inbound body that could not be read.
pub fn inbound_read_failed(err: &axum::Error) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("read inbound body failed: {}", err),
    )
        .into_response()
}
