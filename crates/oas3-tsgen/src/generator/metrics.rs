use serde::Serialize;
use strum::Display;

use crate::generator::{model::Model, operation::Operation};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
  pub models_built: usize,
  pub enums_built: usize,
  pub models_pruned: usize,
  pub operations_built: usize,
  pub variants_built: usize,
  pub services_built: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_model(&mut self, model: &Model) {
    self.models_built += 1;
    if model.is_enum {
      self.enums_built += 1;
    }
  }

  pub fn record_operation(&mut self, operation: &Operation) {
    self.operations_built += 1;
    self.variants_built += operation.variants.len();
  }

  pub fn record_services(&mut self, count: usize) {
    self.services_built += count;
  }

  pub fn record_pruned_model(&mut self, name: &str) {
    self.models_pruned += 1;
    self.record_warning(GenerationWarning::UnusedModel { model: name.to_string() });
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GenerationWarning {
  #[strum(to_string = "Operation '{path}.{method}' has no operationId. Assuming '{assumed_id}'.")]
  MissingOperationId {
    path: String,
    method: String,
    assumed_id: String,
  },
  #[strum(to_string = "Duplicate operation id '{id}'. Assuming '{assigned_id}' for operation '{path}.{method}'.")]
  DuplicateOperationId {
    id: String,
    assigned_id: String,
    path: String,
    method: String,
  },
  #[strum(to_string = "[{operation_id}] Ignoring cookie parameter '{parameter}'.")]
  CookieParameterIgnored { operation_id: String, parameter: String },
  #[strum(to_string = "No tags set on operation '{path}.{method}'. Assuming '{default_tag}'.")]
  MissingTags {
    path: String,
    method: String,
    default_tag: String,
  },
  #[strum(to_string = "Ignoring tag '{tag}' because it is not listed in includeTags.")]
  TagNotIncluded { tag: String },
  #[strum(to_string = "Ignoring tag '{tag}' because it is listed in excludeTags.")]
  TagExcluded { tag: String },
  #[strum(to_string = "Ignoring unused model '{model}'.")]
  UnusedModel { model: String },
}

impl GenerationWarning {
  /// Warnings that describe deliberate filtering rather than a problem in the description.
  #[must_use]
  pub fn is_informational(&self) -> bool {
    matches!(
      self,
      Self::TagNotIncluded { .. } | Self::TagExcluded { .. } | Self::UnusedModel { .. }
    )
  }
}
