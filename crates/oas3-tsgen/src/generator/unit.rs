use serde::Serialize;

use crate::generator::{
  imports::Import,
  naming::{self, file_name, namespace},
};

/// Naming facts shared by every generated unit (models and services).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitIdentity {
  /// Name as declared in the description, e.g. `pets.Pet`.
  pub name: String,
  pub type_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub namespace: Option<String>,
  /// Output file path relative to the unit kind's root, without extension.
  pub file_name: String,
  pub qualified_name: String,
}

impl UnitIdentity {
  #[must_use]
  pub fn new(name: &str, type_name: String) -> Self {
    let namespace = namespace(name);
    let base_file = file_name(&type_name);
    let (file_name, qualified_name) = match &namespace {
      Some(ns) => (
        format!("{ns}/{base_file}"),
        format!("{}{type_name}", naming::type_name(ns)),
      ),
      None => (base_file, type_name.clone()),
    };

    Self {
      name: name.to_string(),
      type_name,
      namespace,
      file_name,
      qualified_name,
    }
  }

  /// Number of directories below the unit kind's root.
  #[must_use]
  pub fn depth(&self) -> usize {
    self.namespace.as_deref().map_or(0, |ns| ns.split('/').count())
  }
}

/// Common surface of generated units that own imports.
pub trait GeneratedUnit {
  fn identity(&self) -> &UnitIdentity;

  fn imports(&self) -> &[Import];

  /// Names referenced only from non-strict positions, excluding anything already imported.
  fn additional_dependencies(&self) -> &[String];

  fn name(&self) -> &str {
    &self.identity().name
  }

  fn type_name(&self) -> &str {
    &self.identity().type_name
  }

  fn file_name(&self) -> &str {
    &self.identity().file_name
  }

  fn qualified_name(&self) -> &str {
    &self.identity().qualified_name
  }

  /// Every model name this unit keeps alive.
  fn referenced_models(&self) -> impl Iterator<Item = &str> {
    self
      .imports()
      .iter()
      .map(|import| import.name.as_str())
      .chain(self.additional_dependencies().iter().map(String::as_str))
  }
}
