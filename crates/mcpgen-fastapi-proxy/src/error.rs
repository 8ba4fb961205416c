use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to render {artifact}: {source}")]
    Template {
        artifact: &'static str,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to serialize {artifact}: {source}")]
    Serialize {
        artifact: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
