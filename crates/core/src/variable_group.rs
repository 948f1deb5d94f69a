//! Variable group model shared by both repositories.
//!
//! The JSON shape follows the service's REST representation so that a
//! group fetched remotely can be written to a file and posted back
//! without translation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single variable of a group.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VariableValue {
    /// Absent for secrets read back from the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_secret: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VariableGroup {
    /// Assigned by the remote service, never by the file store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,

    #[serde(default)]
    pub variables: IndexMap<String, VariableValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_data: Option<serde_json::Value>,
}

impl VariableGroup {
    /// Copies the payload under `name`, dropping the identity.
    #[must_use]
    pub fn clone_for_target(&self, name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            ..self.clone()
        }
    }

    /// Number of secret variables whose value was not returned.
    #[must_use]
    pub fn missing_secret_values(&self) -> usize {
        self.variables
            .values()
            .filter(|v| v.is_secret && v.value.is_none())
            .count()
    }
}
