use std::collections::HashSet;

/// Identifier used when sanitizing leaves nothing behind.
pub const FALLBACK_IDENTIFIER: &str = "operation";

/// Turn an arbitrary string into a bare identifier.
///
/// Every maximal run of characters outside `[A-Za-z0-9_]` becomes a single
/// `_`. An empty result becomes [`FALLBACK_IDENTIFIER`]; a leading digit gets
/// an `_` prefix.
pub fn sanitize(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut in_run = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            result.push(ch);
            in_run = false;
        } else if !in_run {
            result.push('_');
            in_run = true;
        }
    }

    if result.is_empty() {
        return FALLBACK_IDENTIFIER.to_string();
    }
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

/// Seed for an operation's identifier: its `operationId`, or `{method}_{path}`.
pub fn identifier_seed(operation_id: Option<&str>, method: &str, path: &str) -> String {
    match operation_id {
        Some(id) => id.to_string(),
        None => format!("{method}_{path}"),
    }
}

/// Hands out identifiers that are unique within one scope.
///
/// The first request for a name gets it unchanged; later requests get the
/// first free `{name}_2`, `{name}_3`, ... Reserved names count as taken.
#[derive(Debug, Clone, Default)]
pub struct IdentifierAllocator {
    taken: HashSet<String>,
}

impl IdentifierAllocator {
    pub fn new<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: reserved.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allocate(&mut self, base: &str) -> String {
        if self.taken.insert(base.to_string()) {
            return base.to_string();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}_{n}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
