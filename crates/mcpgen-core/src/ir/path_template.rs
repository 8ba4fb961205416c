use std::fmt;

/// One piece of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// A `{name}` placeholder; holds the name without braces.
    Placeholder(String),
}

/// A path template such as `/v1/knowledge-models/{knowledge_model_id}`, split
/// into literal text and placeholders.
///
/// A `{` only opens a placeholder when a `}` follows before any other `{` or
/// `/` and the name between them is non-empty. Stray braces stay literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    segments: Vec<Segment>,
}

impl PathTemplate {
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            match after.find(&['{', '}', '/'][..]) {
                Some(close) if close > 0 && after[close..].starts_with('}') => {
                    push_literal(&mut segments, &rest[..open]);
                    segments.push(Segment::Placeholder(after[..close].to_string()));
                    rest = &after[close + 1..];
                }
                _ => {
                    push_literal(&mut segments, &rest[..=open]);
                    rest = after;
                }
            }
        }
        push_literal(&mut segments, rest);

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in order of appearance (repeats included).
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Replace every placeholder bound in `bindings` with its value.
    ///
    /// Unbound placeholders are kept verbatim as `{name}`.
    pub fn substitute(&self, bindings: &[(&str, &str)]) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    match bindings.iter().find(|(key, _)| *key == name.as_str()) {
                        Some((_, value)) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                }
            }
        }
        out
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.substitute(&[]))
    }
}

fn push_literal(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Literal(last)) = segments.last_mut() {
        last.push_str(text);
    } else {
        segments.push(Segment::Literal(text.to_string()));
    }
}
