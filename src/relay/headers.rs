//! Header fan-out.
//!
//! Expands descriptor `header` entries into an outbound [`HeaderMap`]:
//! - `Single` sets the key to exactly one value
//! - `Multiple` appends every element under the key, in order
//! - `Other` is skipped and reported through [`FannedHeaders::skipped`]

use std::collections::BTreeMap;

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use crate::observability::metrics;
use crate::relay::descriptor::HeaderField;

/// Result of fanning out descriptor headers.
#[derive(Debug, Default)]
pub struct FannedHeaders {
    pub headers: HeaderMap,
    /// Keys whose value had an unsupported shape.
    pub skipped: Vec<String>,
}

/// A header key or value that cannot appear on the wire.
#[derive(Debug)]
pub struct InvalidHeader {
    pub key: String,
    pub reason: String,
}

impl std::fmt::Display for InvalidHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid header {:?}: {}", self.key, self.reason)
    }
}

impl std::error::Error for InvalidHeader {}

/// Build the outbound header map from descriptor header fields.
pub fn fan_out(fields: &BTreeMap<String, HeaderField>) -> Result<FannedHeaders, InvalidHeader> {
    let mut fanned = FannedHeaders::default();

    for (key, field) in fields {
        match field {
            HeaderField::Single(value) => {
                let name = header_name(key)?;
                let value = header_value(key, value)?;
                fanned.headers.insert(name, value);
            }
            HeaderField::Multiple(values) => {
                let name = header_name(key)?;
                for value in values {
                    let value = header_value(key, value)?;
                    fanned.headers.append(name.clone(), value);
                }
            }
            HeaderField::Other(value) => {
                tracing::warn!(header = %key, value = %value, "Skipping header with unsupported value shape");
                metrics::record_header_skipped();
                fanned.skipped.push(key.clone());
            }
        }
    }

    Ok(fanned)
}

fn header_name(key: &str) -> Result<HeaderName, InvalidHeader> {
    HeaderName::from_bytes(key.as_bytes()).map_err(|e| InvalidHeader {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

fn header_value(key: &str, value: &str) -> Result<HeaderValue, InvalidHeader> {
    HeaderValue::from_str(value).map_err(|e| InvalidHeader {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
