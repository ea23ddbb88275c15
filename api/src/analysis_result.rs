//! The opaque payload returned by the analysis service.

use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use serde_json::Value;

/// Whatever JSON the service sent back.
///
/// No schema is imposed; the value is kept and rendered as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(Value);

impl AnalysisResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parses a response body. Any valid JSON document is accepted.
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body).map(Self)
    }

    /// The canned result shown when the service cannot be reached.
    pub fn demo() -> Self {
        Self(json!({
            "status": "success",
            "text": "Detected UI elements...",
            "confidence": 0.98,
        }))
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Two-space indented rendering, as shown in the results card.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }

    /// Single-line rendering for the raw data panel.
    pub fn compact(&self) -> String {
        self.0.to_string()
    }
}

impl From<Value> for AnalysisResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
