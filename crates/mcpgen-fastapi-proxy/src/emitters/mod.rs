pub mod docs;
pub mod resources;
pub mod scaffold;
pub mod server;
pub mod smoke_test;
pub mod tools;

use minijinja::{AutoEscape, Environment, Value};

use crate::error::GeneratorError;
use crate::python;

/// Render one embedded template against `ctx`.
///
/// Block tags on their own line leave no trace in the output, and the
/// template's final newline is kept.
pub(crate) fn render(
    artifact: &'static str,
    source: &'static str,
    ctx: Value,
) -> Result<String, GeneratorError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_filter("py_str", |value: String| python::string_literal(&value));

    let template_error = |source| GeneratorError::Template { artifact, source };
    env.add_template(artifact, source).map_err(template_error)?;
    env.get_template(artifact)
        .and_then(|tmpl| tmpl.render(ctx))
        .map_err(template_error)
}
