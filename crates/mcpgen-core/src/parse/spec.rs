use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::lenient::{from_value_or_default, lenient, lenient_seq};
use super::parameter::ParameterOrRef;
use super::server::Server;

/// Info object describing the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Info {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub version: Option<String>,
}

/// The parts of `components` that operations can point into.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Components {
    /// Raw parameter definitions, keyed by name, for `$ref` resolution.
    #[serde(deserialize_with = "lenient")]
    pub parameters: IndexMap<String, Value>,
}

/// A path item: every key under one path template, in source order.
///
/// Method keys and non-method keys (`parameters`, `summary`, extensions) are
/// kept side by side; the enumerator decides which ones are operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    pub entries: IndexMap<String, Value>,
}

impl PathItem {
    /// Parameters declared at the path level, shared by every operation.
    pub fn shared_parameters(&self) -> Vec<ParameterOrRef> {
        match self.entries.get("parameters") {
            Some(value) => lenient_seq(value.clone()).unwrap_or_default(),
            None => Vec::new(),
        }
    }
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(Self {
                entries: map.into_iter().collect(),
            }),
            other => {
                log::warn!("path item is not an object, ignoring {other}");
                Ok(Self::default())
            }
        }
    }
}

/// A loaded OpenAPI document.
///
/// Only the parts the generator reads are modelled; everything else in the
/// source is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OpenApiDocument {
    #[serde(deserialize_with = "lenient")]
    pub info: Info,

    #[serde(deserialize_with = "lenient_seq")]
    pub servers: Vec<Server>,

    #[serde(deserialize_with = "lenient")]
    pub paths: IndexMap<String, PathItem>,

    #[serde(deserialize_with = "lenient")]
    pub components: Components,
}

impl OpenApiDocument {
    /// Build a document from any JSON value. Non-objects yield an empty document.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            log::warn!("spec root is not an object; treating it as empty");
            return Self::default();
        }
        from_value_or_default(value)
    }
}
