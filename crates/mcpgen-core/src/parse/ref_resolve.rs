use crate::error::ResolveError;

use super::parameter::{Parameter, ParameterOrRef};
use super::spec::Components;

const PARAMETERS_PREFIX: &str = "#/components/parameters/";

/// Follow chains of at most this many references before giving up.
const MAX_DEPTH: usize = 16;

/// Resolves local `$ref` pointers to parameter definitions.
pub struct RefResolver<'a> {
    components: &'a Components,
}

impl<'a> RefResolver<'a> {
    pub fn new(components: &'a Components) -> Self {
        Self { components }
    }

    /// Resolve a parameter, following references into `components.parameters`.
    pub fn resolve_parameter(&self, param: &ParameterOrRef) -> Result<Parameter, ResolveError> {
        let mut current = param.clone();
        for _ in 0..MAX_DEPTH {
            match current {
                ParameterOrRef::Parameter(p) => return Ok(p),
                ParameterOrRef::Ref { ref_path } => current = self.lookup(&ref_path)?,
            }
        }
        match param {
            ParameterOrRef::Ref { ref_path } => Err(ResolveError::Circular(ref_path.clone())),
            ParameterOrRef::Parameter(p) => Ok(p.clone()),
        }
    }

    fn lookup(&self, reference: &str) -> Result<ParameterOrRef, ResolveError> {
        let name = reference
            .strip_prefix(PARAMETERS_PREFIX)
            .ok_or_else(|| ResolveError::Unsupported(reference.to_string()))?;
        let name = unescape_pointer(name);
        let raw = self
            .components
            .parameters
            .get(&name)
            .ok_or_else(|| ResolveError::NotFound(reference.to_string()))?;
        serde_json::from_value(raw.clone()).map_err(|source| ResolveError::Malformed {
            reference: reference.to_string(),
            source,
        })
    }
}

/// Undo JSON-pointer escaping (`~1` is `/`, `~0` is `~`).
fn unescape_pointer(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}
