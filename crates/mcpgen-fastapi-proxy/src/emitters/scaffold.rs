/// Contents of `requirements.txt`: the proxy's runtime dependencies.
pub fn emit_requirements() -> String {
    include_str!("../../templates/requirements.txt").to_string()
}
