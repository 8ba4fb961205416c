use crate::parse::parameter::ParameterLocation;

use super::path_template::PathTemplate;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    /// Recognize a path-item key as a method. Any other key yields `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        let method = match key.to_ascii_lowercase().as_str() {
            "get" => HttpMethod::Get,
            "post" => HttpMethod::Post,
            "put" => HttpMethod::Put,
            "delete" => HttpMethod::Delete,
            "patch" => HttpMethod::Patch,
            "options" => HttpMethod::Options,
            "head" => HttpMethod::Head,
            "trace" => HttpMethod::Trace,
            _ => return None,
        };
        Some(method)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }

    pub fn as_lower(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Trace => "trace",
        }
    }
}

/// One operation, normalized for the emitters.
///
/// Emitters only ever see a sequence of these, never the raw document.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDescriptor {
    /// Sanitized identifier, unique within the run.
    pub identifier: String,
    pub method: HttpMethod,
    /// Path template exactly as written in the document.
    pub path: String,
    pub template: PathTemplate,
    /// Declared path parameters, in declaration order.
    pub path_params: Vec<PathParam>,
    /// Every other parameter; forwarded as query parameters.
    pub forwarded_params: Vec<ForwardedParam>,
    pub summary: Option<String>,
    pub description: Option<String>,
}

impl OperationDescriptor {
    pub fn path_param_names(&self) -> impl Iterator<Item = &str> {
        self.path_params.iter().map(|p| p.name.as_str())
    }

    /// Placeholders in the template that no declared path parameter binds.
    pub fn unbound_placeholders(&self) -> Vec<&str> {
        self.template
            .placeholders()
            .filter(|name| !self.path_params.iter().any(|p| p.name == *name))
            .collect()
    }
}

/// A declared path parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParam {
    /// Name as declared in the document and in the `{name}` placeholder.
    pub name: String,
    /// Argument identifier in generated code.
    pub ident: String,
    pub description: Option<String>,
}

/// A non-path parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardedParam {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    pub description: Option<String>,
}
