#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
  #[error("unresolved reference '{pointer}'")]
  UnresolvedReference { pointer: String },

  #[error("reference '{pointer}' does not point to a valid definition: {source}")]
  InvalidReferenceTarget {
    pointer: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("invalid API description: {0}")]
  InvalidDescription(#[source] serde_json::Error),

  #[error("invalid YAML document: {0}")]
  Yaml(#[from] serde_yaml::Error),
}
