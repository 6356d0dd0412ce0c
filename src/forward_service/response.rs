use serde::Serialize;
use serde_json::Value;

use crate::forward_service::request::ForwardHeaders;

/// The two shapes `data` can take on the wire: a JSON value or plain text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForwardData {
    Structured(Value),
    Raw(String),
}

impl ForwardData {
    /// Scalar JSON bodies are reported as their string rendering; objects,
    /// arrays and null stay structured.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) | Value::Array(_) | Value::Null => ForwardData::Structured(value),
            Value::String(text) => ForwardData::Raw(text),
            Value::Number(number) => ForwardData::Raw(number.to_string()),
            Value::Bool(flag) => ForwardData::Raw(flag.to_string()),
        }
    }
}

/// Normalized envelope describing the target's response, built fresh per
/// forward and serialized back to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardResult {
    pub status: u16,
    pub status_text: String,
    pub data: ForwardData,
    pub response_time_ms: u64,
    pub headers: ForwardHeaders,
}
