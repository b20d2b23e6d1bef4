//! Typed access to provisioner output variables

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::StateError;

/// Wrapper around a single output variable as printed by `output -json`.
///
/// The provisioner wraps every variable in an object carrying `value`
/// alongside type/sensitivity metadata we do not care about.
#[derive(Debug, Clone, Deserialize)]
struct OutputValue {
    value: Value,
}

/// The output variables the inventory is built from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateOutputs {
    /// VM names, in provisioner declaration order
    pub vm_names: Vec<String>,
    /// VM name -> external (public) IP
    pub external_ips: HashMap<String, String>,
    /// VM name -> internal (VPC) IP
    pub internal_ips: HashMap<String, String>,
    /// VM name -> label key -> label value
    pub labels: HashMap<String, HashMap<String, String>>,
}

impl StateOutputs {
    /// Parse the `output -json` document.
    ///
    /// # Errors
    /// Returns [`StateError::MissingOutput`] if a required variable is
    /// absent from the state, or [`StateError::Parse`] if the document or
    /// a variable's value has an unexpected shape. A missing variable is
    /// fatal; it means the infrastructure state does not match what this
    /// tool was built for.
    pub fn from_json(text: &str) -> Result<Self, StateError> {
        let raw: HashMap<String, OutputValue> =
            serde_json::from_str(text).map_err(|e| StateError::Parse(e.to_string()))?;

        Ok(Self {
            vm_names: extract(&raw, "vm_names")?,
            external_ips: extract(&raw, "vm_instance_external_ips")?,
            internal_ips: extract(&raw, "vm_instance_internal_ips")?,
            labels: extract(&raw, "vm_instance_labels")?,
        })
    }
}

/// Look up one output variable and deserialize its `value` field
fn extract<T: serde::de::DeserializeOwned>(
    raw: &HashMap<String, OutputValue>,
    name: &str,
) -> Result<T, StateError> {
    let wrapper = raw
        .get(name)
        .ok_or_else(|| StateError::MissingOutput(name.to_string()))?;
    serde_json::from_value(wrapper.value.clone())
        .map_err(|e| StateError::Parse(format!("output variable '{name}': {e}")))
}
