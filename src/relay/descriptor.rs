//! Call descriptor decoding.
//!
//! The inbound payload is a JSON object:
//!
//! ```text
//! { "url": string, "method": string, "body": object?, "header": object? }
//! ```
//!
//! Unknown fields are ignored. `url` and `method` decode as empty strings when
//! missing; they are checked later by the executor, not here.

use std::collections::BTreeMap;

use serde::de::Unexpected;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::relay::error::RelayError;

/// Decoded description of one outbound HTTP call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CallDescriptor {
    /// Absolute target URL.
    #[serde(default)]
    pub url: String,

    /// HTTP method, case-insensitive.
    #[serde(default)]
    pub method: String,

    /// JSON object sent as the outbound body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Map<String, Value>>,

    /// Outbound headers, replacing the defaults when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<BTreeMap<String, HeaderField>>,
}

/// Shape of a single `header` entry.
///
/// Decided once at decode time so the fan-out rule is an exhaustive match.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum HeaderField {
    /// Replaces any existing value for the key.
    Single(String),
    /// Each element is appended in order.
    Multiple(Vec<String>),
    /// Any other JSON value. Skipped during fan-out.
    Other(Value),
}

impl CallDescriptor {
    /// Body to serialize, if present and non-empty.
    pub fn body_fields(&self) -> Option<&Map<String, Value>> {
        self.body.as_ref().filter(|fields| !fields.is_empty())
    }

    /// Headers to fan out, if present and non-empty.
    pub fn header_fields(&self) -> Option<&BTreeMap<String, HeaderField>> {
        self.header.as_ref().filter(|fields| !fields.is_empty())
    }
}

/// Decode a fully-read inbound payload into a [`CallDescriptor`].
///
/// The payload must be a JSON object. Duplicate keys keep the last value.
pub fn decode(raw: &[u8]) -> Result<CallDescriptor, RelayError> {
    let decode_error = |source: serde_json::Error| RelayError::Decode {
        source,
        raw: raw.to_vec(),
    };

    let value: Value = serde_json::from_slice(raw).map_err(decode_error)?;
    if !value.is_object() {
        return Err(decode_error(serde::de::Error::invalid_type(
            unexpected(&value),
            &"a call descriptor object",
        )));
    }

    serde_json::from_value(value).map_err(decode_error)
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
