use serde::Deserialize;
use serde_json::Value;

use super::lenient::{from_value_or_default, lenient, lenient_seq};
use super::parameter::ParameterOrRef;

/// An API operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Operation {
    #[serde(rename = "operationId", deserialize_with = "lenient")]
    pub operation_id: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub summary: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,

    #[serde(deserialize_with = "lenient_seq")]
    pub parameters: Vec<ParameterOrRef>,
}

impl Operation {
    /// Read an operation from the raw value under a method key.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            log::warn!("operation is not an object, treating as empty: {value}");
            return Self::default();
        }
        from_value_or_default(value.clone())
    }
}
