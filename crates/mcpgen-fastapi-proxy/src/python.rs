//! Python source helpers for the emitted proxy.

use std::fmt::Write;

use mcpgen_core::ir::{OperationDescriptor, Segment};

/// Names the emitted `server.py` binds itself.
///
/// Covers Python keywords, the builtins the module looks up, the module-level
/// names of the prologue, and the fixed arguments and locals of every handler.
/// Operation and path-parameter identifiers must avoid all of them.
pub const RESERVED: &[&str] = &[
    // keywords
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
    // builtins used by annotations and `decode`
    "dict", "str", "ValueError",
    // imports
    "os", "asynccontextmanager", "Annotated", "Any", "httpx", "Body", "Depends", "FastAPI",
    "Path", "Request",
    // prologue
    "BASE_URL", "ACCESS_KEY_ENV", "AUTH_HEADER", "AUTH_SCHEME", "TIMEOUT_SECONDS",
    "get_headers", "lifespan", "app", "get_client", "query_params", "decode",
    // handler arguments and locals
    "data", "query", "client", "url", "resp",
];

/// Render `value` as a double-quoted Python string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    push_escaped(&mut out, value, false);
    out.push('"');
    out
}

/// The f-string that builds an operation's upstream URL.
///
/// Declared path parameters are interpolated from their handler arguments.
/// Placeholders without a declared parameter stay in the URL as literal
/// `{name}` text.
pub fn url_fstring(op: &OperationDescriptor) -> String {
    let mut out = String::from("f\"{BASE_URL}");
    for segment in op.template.segments() {
        match segment {
            Segment::Literal(text) => push_escaped(&mut out, text, true),
            Segment::Placeholder(name) => {
                match op.path_params.iter().find(|p| &p.name == name) {
                    Some(param) => {
                        out.push('{');
                        out.push_str(&param.ident);
                        out.push('}');
                    }
                    None => {
                        out.push_str("{{");
                        push_escaped(&mut out, name, true);
                        out.push_str("}}");
                    }
                }
            }
        }
    }
    out.push('"');
    out
}

fn push_escaped(out: &mut String, value: &str, fstring: bool) {
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '{' if fstring => out.push_str("{{"),
            '}' if fstring => out.push_str("}}"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
}
