use serde::Deserialize;

use super::lenient::lenient;

/// Parameter location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    #[default]
    #[serde(other)]
    Other,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
            ParameterLocation::Other => "other",
        }
    }
}

/// An API parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in", default, deserialize_with = "lenient")]
    pub location: ParameterLocation,

    #[serde(default, deserialize_with = "lenient")]
    pub required: bool,

    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

impl Parameter {
    /// Two declarations name the same parameter when name and location agree.
    pub fn same_slot(&self, other: &Parameter) -> bool {
        self.name == other.name && self.location == other.location
    }
}

/// A reference or inline parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Parameter(Parameter),
}
