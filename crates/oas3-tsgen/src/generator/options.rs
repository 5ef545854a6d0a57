use serde::{Deserialize, Serialize};

/// How enum schemas are exposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EnumStyle {
  /// Members named `IN_PROGRESS`.
  Upper,
  /// Members named `InProgress`.
  #[default]
  #[serde(alias = "default")]
  Pascal,
  /// No enum members; the model is a plain literal-union alias.
  Alias,
}

/// Knobs that shape names, filters and pruning of the generation model.
///
/// Deserializes from the camelCase JSON configuration file accepted by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, bon::Builder)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
  #[builder(into, default)]
  pub model_prefix: String,
  #[builder(into, default)]
  pub model_suffix: String,
  #[builder(into, default)]
  pub service_prefix: String,
  #[builder(into, default = "Service".to_string())]
  pub service_suffix: String,
  #[builder(default)]
  pub enum_style: EnumStyle,
  /// When non-empty, only operations carrying one of these tags are kept.
  #[builder(default)]
  pub include_tags: Vec<String>,
  #[builder(default)]
  pub exclude_tags: Vec<String>,
  /// Parameter names dropped from every operation.
  #[builder(default)]
  pub exclude_parameters: Vec<String>,
  /// Leaves JSON variants without the `$Json` suffix.
  #[builder(default)]
  pub skip_json_suffix: bool,
  /// Drops models no service reaches.
  #[builder(default = true)]
  pub ignore_unused_models: bool,
  /// Tag assigned to operations that declare none.
  #[builder(into, default = "Api".to_string())]
  pub default_tag: String,
}

impl Default for GeneratorOptions {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl GeneratorOptions {
  pub(crate) fn is_tag_included(&self, tag: &str) -> bool {
    self.include_tags.is_empty() || self.include_tags.iter().any(|t| t == tag)
  }

  pub(crate) fn is_tag_excluded(&self, tag: &str) -> bool {
    self.exclude_tags.iter().any(|t| t == tag)
  }

  pub(crate) fn is_parameter_excluded(&self, name: &str) -> bool {
    self.exclude_parameters.iter().any(|p| p == name)
  }
}
