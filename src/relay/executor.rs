//! Relay executor.
//!
//! Turns a [`CallDescriptor`] into one outbound request, executes it and maps
//! the outcome into a [`RelayResult`].
//!
//! # Steps
//! ```text
//! method check → body encode → request build → header fan-out → execute → read body
//! ```
//!
//! Reading the outbound body is best-effort: a read failure is logged and the
//! outbound status is still returned, with no body.

use axum::body::Bytes;
use axum::http::StatusCode;
use reqwest::{Client, Method, Request};
use url::Url;

use crate::observability::metrics;
use crate::relay::descriptor::CallDescriptor;
use crate::relay::error::RelayError;
use crate::relay::headers;

/// Outcome of a completed outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayResult {
    pub status: StatusCode,
    /// Absent when the outbound body was empty or could not be read.
    pub body: Option<Bytes>,
}

/// Executes call descriptors with a shared HTTP client.
///
/// Cloning is cheap; clones share the client's connection pool.
#[derive(Debug, Clone)]
pub struct RelayExecutor {
    client: Client,
}

impl Default for RelayExecutor {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

impl RelayExecutor {
    /// Create an executor that sends every call through `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Execute one descriptor. Issues at most one outbound call.
    pub async fn execute(&self, descriptor: CallDescriptor) -> Result<RelayResult, RelayError> {
        let request = build_request(&descriptor)?;

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            headers = request.headers().len(),
            has_body = request.body().is_some(),
            "Sending outbound request"
        );

        let response = self
            .client
            .execute(request)
            .await
            .map_err(RelayError::Transport)?;

        let status = response.status();
        let body = match response.bytes().await {
            Ok(bytes) if bytes.is_empty() => None,
            Ok(bytes) => Some(bytes),
            Err(e) => {
                let err = RelayError::ResponseRead(e);
                tracing::warn!(status = %status, stage = err.stage(), error = %err, "Outbound body discarded");
                metrics::record_response_read_failure();
                None
            }
        };

        Ok(RelayResult { status, body })
    }
}

/// Build the outbound request described by `descriptor` without sending it.
pub fn build_request(descriptor: &CallDescriptor) -> Result<Request, RelayError> {
    if descriptor.method.is_empty() {
        return Err(RelayError::InvalidRequest("method empty"));
    }

    let body = encode_body(descriptor)?;

    let build_error = |reason: String, body: &Option<Vec<u8>>| RelayError::RequestBuild {
        reason,
        method: descriptor.method.clone(),
        url: descriptor.url.clone(),
        body: body.clone(),
    };

    let method = Method::from_bytes(descriptor.method.to_uppercase().as_bytes())
        .map_err(|e| build_error(e.to_string(), &body))?;
    let url = Url::parse(&descriptor.url).map_err(|e| build_error(e.to_string(), &body))?;

    let headers = descriptor
        .header_fields()
        .map(headers::fan_out)
        .transpose()
        .map_err(|e| build_error(e.to_string(), &body))?;

    let mut request = Request::new(method, url);
    if let Some(body) = body {
        *request.body_mut() = Some(body.into());
    }
    if let Some(fanned) = headers {
        *request.headers_mut() = fanned.headers;
    }

    Ok(request)
}

/// Serialize the descriptor body. A zero-length encoding counts as no body.
fn encode_body(descriptor: &CallDescriptor) -> Result<Option<Vec<u8>>, RelayError> {
    let Some(fields) = descriptor.body_fields() else {
        return Ok(None);
    };

    let encoded = serde_json::to_vec(fields).map_err(RelayError::BodyEncode)?;
    Ok(Some(encoded).filter(|bytes| !bytes.is_empty()))
}
