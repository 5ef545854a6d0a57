//! Builds the complete generation model from a loaded description.
//!
//! ```no_run
//! use oas3_tsgen::generator::{GeneratorOptions, description::ApiDescription, orchestrator::Orchestrator};
//!
//! # fn example() -> anyhow::Result<()> {
//! let text = std::fs::read_to_string("openapi.json")?;
//! let description = ApiDescription::from_json(&text)?;
//! let output = Orchestrator::new(description, GeneratorOptions::default()).build()?;
//!
//! println!(
//!   "{} models, {} services, {} warnings",
//!   output.model.models().len(),
//!   output.model.services().len(),
//!   output.stats.warnings.len()
//! );
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::generator::{
  GeneratorOptions,
  context::BuildContext,
  description::{ApiDescription, ServerSpec},
  errors::GenerationError,
  metrics::GenerationStats,
  model::{Model, build_models},
  operation::Operation,
  operation_registry::build_operations,
  pruner::prune_unused_models,
  service::{Service, build_services},
};

/// The finished, read-only result handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationModel {
  models: IndexMap<String, Model>,
  services: IndexMap<String, Service>,
  operations: IndexMap<String, Operation>,
  #[serde(skip_serializing_if = "Option::is_none")]
  root_url: Option<String>,
}

impl GenerationModel {
  #[must_use]
  pub fn models(&self) -> &IndexMap<String, Model> {
    &self.models
  }

  #[must_use]
  pub fn services(&self) -> &IndexMap<String, Service> {
    &self.services
  }

  #[must_use]
  pub fn operations(&self) -> &IndexMap<String, Operation> {
    &self.operations
  }

  #[must_use]
  pub fn root_url(&self) -> Option<&str> {
    self.root_url.as_deref()
  }

  #[must_use]
  pub fn model(&self, name: &str) -> Option<&Model> {
    self.models.get(name)
  }

  #[must_use]
  pub fn service(&self, tag: &str) -> Option<&Service> {
    self.services.get(tag)
  }

  #[must_use]
  pub fn operation(&self, id: &str) -> Option<&Operation> {
    self.operations.get(id)
  }

  /// Operations of a service, in service order.
  pub fn service_operations<'a>(&'a self, service: &'a Service) -> impl Iterator<Item = &'a Operation> + 'a {
    service.operations.iter().filter_map(|id| self.operations.get(id))
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationOutput {
  pub model: GenerationModel,
  pub stats: GenerationStats,
}

pub struct Orchestrator {
  description: ApiDescription,
  options: GeneratorOptions,
}

impl Orchestrator {
  #[must_use]
  pub fn new(description: ApiDescription, options: GeneratorOptions) -> Self {
    Self { description, options }
  }

  #[must_use]
  pub fn description(&self) -> &ApiDescription {
    &self.description
  }

  #[must_use]
  pub fn options(&self) -> &GeneratorOptions {
    &self.options
  }

  /// Runs every phase: models, operations, services, then pruning of unused models.
  ///
  /// # Errors
  ///
  /// Fails on a `$ref` that does not resolve or points to something of the wrong shape.
  pub fn build(&self) -> Result<GenerationOutput, GenerationError> {
    let mut context = BuildContext::new(&self.description, &self.options);

    let mut models = build_models(&mut context)?;
    let mut operations = build_operations(&mut context)?;
    let services = build_services(&operations, &mut context);

    let in_service = services
      .values()
      .flat_map(|service| service.operations.iter().map(String::as_str))
      .collect::<BTreeSet<_>>();
    operations.retain(|id, _| in_service.contains(id.as_str()));

    let mut stats = context.into_stats();
    if self.options.ignore_unused_models {
      prune_unused_models(&mut models, &services, &mut stats);
    }

    let model = GenerationModel {
      models,
      services,
      operations,
      root_url: root_url(&self.description.document().servers),
    };

    Ok(GenerationOutput { model, stats })
  }
}

/// URL of the first server with `{variable}` placeholders replaced by their defaults.
#[must_use]
pub fn root_url(servers: &[ServerSpec]) -> Option<String> {
  let server = servers.first()?;
  let url = server.variables.iter().fold(server.url.clone(), |url, (name, variable)| {
    let value = match &variable.default {
      Value::String(text) => text.clone(),
      Value::Null => String::new(),
      other => other.to_string(),
    };
    url.replace(&format!("{{{name}}}"), &value)
  });
  Some(url)
}
