use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::PlotElement;
use crate::error::{PlotError, PlotResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputationStatus {
    #[default]
    Ok,
    Error,
    #[serde(other)]
    Unknown,
}

/// Envelope returned by the backend math services.
///
/// Only `plot_elements` feeds the scene pipeline; the remaining fields are
/// carried for the presentation layer and round-trip untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComputationResult {
    #[serde(default)]
    pub status: ComputationStatus,
    #[serde(default)]
    pub operation: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_elements_lenient")]
    pub plot_elements: Vec<PlotElement>,
    #[serde(default)]
    pub latex: IndexMap<String, String>,
}

impl ComputationResult {
    #[must_use]
    pub fn new(operation: impl Into<String>, plot_elements: Vec<PlotElement>) -> Self {
        Self {
            operation: operation.into(),
            plot_elements,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == ComputationStatus::Ok
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse computation result: {e}"))
        })
    }
}

/// Decodes each element independently so a non-object entry is dropped
/// instead of rejecting the whole envelope.
fn deserialize_elements_lenient<'de, D>(deserializer: D) -> Result<Vec<PlotElement>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let mut elements = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<PlotElement>(value) {
            Ok(element) => elements.push(element),
            Err(err) => warn!(index, error = %err, "dropping undecodable plot element"),
        }
    }
    Ok(elements)
}
