use std::collections::BTreeSet;

use serde::Serialize;

use crate::generator::{
  GeneratorOptions,
  description::{AdditionalProperties, SchemaNode},
  naming::{model_file, qualified_name, unqualified_name},
  unit::UnitIdentity,
};

/// A model another unit depends on, as the renderer needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Import {
  pub name: String,
  pub type_name: String,
  pub qualified_name: String,
  /// The import must be aliased because the unqualified name is not unique.
  pub use_alias: bool,
  pub file: String,
}

impl Import {
  #[must_use]
  pub fn new(name: &str, path_to_models: &str, options: &GeneratorOptions) -> Self {
    let type_name = unqualified_name(name, options);
    let qualified_name = qualified_name(name, options);
    Self {
      name: name.to_string(),
      use_alias: type_name != qualified_name,
      file: model_file(path_to_models, name, options),
      type_name,
      qualified_name,
    }
  }
}

/// Where a unit lives relative to the models directory and which name it must not import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportScope {
  own_name: Option<String>,
  path_to_models: String,
}

impl ImportScope {
  #[must_use]
  pub fn for_model(identity: &UnitIdentity) -> Self {
    let path_to_models = match identity.depth() {
      0 => "./".to_string(),
      depth => "../".repeat(depth),
    };
    Self {
      own_name: Some(identity.name.clone()),
      path_to_models,
    }
  }

  #[must_use]
  pub fn for_service() -> Self {
    Self {
      own_name: None,
      path_to_models: "../models/".to_string(),
    }
  }

  #[must_use]
  pub fn path_to_models(&self) -> &str {
    &self.path_to_models
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedDependencies {
  pub imports: Vec<Import>,
  pub additional_dependencies: Vec<String>,
}

/// Accumulates the schema names a unit references.
///
/// References are recorded by name and never followed, so cyclic definitions terminate.
/// Strict references become imports; the others only keep their models alive.
#[derive(Debug)]
pub struct DependencyCollector<'o> {
  scope: ImportScope,
  options: &'o GeneratorOptions,
  strict: BTreeSet<String>,
  additional: BTreeSet<String>,
}

impl<'o> DependencyCollector<'o> {
  #[must_use]
  pub fn new(scope: ImportScope, options: &'o GeneratorOptions) -> Self {
    Self {
      scope,
      options,
      strict: BTreeSet::new(),
      additional: BTreeSet::new(),
    }
  }

  /// Records every reference reachable inside `node`, as additional dependencies when `additional`
  /// is set. Union members nested in properties are leaves like any other position.
  pub fn collect(&mut self, node: Option<&SchemaNode>, additional: bool) {
    let Some(node) = node else {
      return;
    };

    if let Some(name) = node.reference_name() {
      self.record(name, additional);
      return;
    }

    for member in node.one_of.iter().chain(&node.all_of).chain(&node.any_of) {
      self.collect(Some(member), additional);
    }
    self.collect(node.items.as_deref(), additional);
    for property in node.properties.values() {
      self.collect(Some(property), additional);
    }
    if let Some(AdditionalProperties::Schema(schema)) = &node.additional_properties {
      self.collect(Some(schema), additional);
    }
  }

  fn record(&mut self, name: &str, additional: bool) {
    if self.scope.own_name.as_deref() == Some(name) {
      return;
    }
    if additional {
      self.additional.insert(name.to_string());
    } else {
      self.strict.insert(name.to_string());
    }
  }

  #[must_use]
  pub fn finish(self) -> CollectedDependencies {
    let imports = self
      .strict
      .iter()
      .map(|name| Import::new(name, &self.scope.path_to_models, self.options))
      .collect();
    let additional_dependencies = self.additional.difference(&self.strict).cloned().collect();

    CollectedDependencies {
      imports,
      additional_dependencies,
    }
  }
}
