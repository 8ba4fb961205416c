use indexmap::IndexMap;
use serde::Deserialize;

use super::lenient::lenient;

/// A server variable for URL templates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerVariable {
    #[serde(deserialize_with = "lenient")]
    pub default: String,

    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
}

/// A server URL definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Server {
    #[serde(deserialize_with = "lenient")]
    pub url: String,

    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub variables: IndexMap<String, ServerVariable>,
}
