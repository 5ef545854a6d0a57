use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::generator::{
  GeneratorOptions,
  context::BuildContext,
  imports::{DependencyCollector, Import, ImportScope},
  metrics::GenerationWarning,
  naming::service_class,
  operation::Operation,
  unit::{GeneratedUnit, UnitIdentity},
};

const SERVICE_FILE_SUFFIX: &str = "-service";

/// Operations sharing a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
  #[serde(flatten)]
  pub identity: UnitIdentity,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  /// Ids of the operations, in registration order.
  pub operations: Vec<String>,
  pub imports: Vec<Import>,
  pub additional_dependencies: Vec<String>,
}

impl Service {
  #[must_use]
  pub fn build(
    tag: &str,
    description: Option<String>,
    operations: &[&Operation],
    options: &GeneratorOptions,
  ) -> Self {
    let mut identity = UnitIdentity::new(tag, service_class(tag, options));
    if let Some(stem) = identity.file_name.strip_suffix(SERVICE_FILE_SUFFIX) {
      identity.file_name = format!("{stem}.service");
    }

    let mut collector = DependencyCollector::new(ImportScope::for_service(), options);
    for operation in operations {
      collect_operation(&mut collector, operation);
    }
    let dependencies = collector.finish();

    Self {
      identity,
      description,
      operations: operations.iter().map(|operation| operation.id.clone()).collect(),
      imports: dependencies.imports,
      additional_dependencies: dependencies.additional_dependencies,
    }
  }
}

/// Parameters, security schemes, request bodies and the success response are strict imports;
/// every other response only keeps its models alive.
fn collect_operation(collector: &mut DependencyCollector<'_>, operation: &Operation) {
  for parameter in &operation.parameters {
    collector.collect(parameter.schema.as_ref(), false);
  }
  for security in operation.security.iter().flatten() {
    collector.collect(security.schema.as_ref(), false);
  }
  if let Some(body) = &operation.request_body {
    for content in &body.content {
      collector.collect(content.schema.as_ref(), false);
    }
  }
  for response in &operation.responses {
    let additional = operation.success_status.as_deref() != Some(response.status_code.as_str());
    for content in &response.content {
      collector.collect(content.schema.as_ref(), additional);
    }
  }
}

impl GeneratedUnit for Service {
  fn identity(&self) -> &UnitIdentity {
    &self.identity
  }

  fn imports(&self) -> &[Import] {
    &self.imports
  }

  fn additional_dependencies(&self) -> &[String] {
    &self.additional_dependencies
  }
}

/// Groups operations by tag, honoring `includeTags` and `excludeTags`. Services appear in the
/// order their tag is first seen.
pub(crate) fn build_services(
  operations: &IndexMap<String, Operation>,
  context: &mut BuildContext<'_>,
) -> IndexMap<String, Service> {
  let options = context.options();
  let mut by_tag: IndexMap<&str, Vec<&Operation>> = IndexMap::new();
  let mut reported = BTreeSet::new();

  for operation in operations.values() {
    for tag in &operation.tags {
      let warning = if !options.is_tag_included(tag) {
        Some(GenerationWarning::TagNotIncluded { tag: tag.clone() })
      } else if options.is_tag_excluded(tag) {
        Some(GenerationWarning::TagExcluded { tag: tag.clone() })
      } else {
        None
      };

      match warning {
        Some(warning) => {
          if reported.insert(tag.as_str()) {
            context.warn(warning);
          }
        }
        None => by_tag.entry(tag.as_str()).or_default().push(operation),
      }
    }
  }

  let document_tags = &context.description().document().tags;
  let services = by_tag
    .into_iter()
    .map(|(tag, tagged)| {
      let description = document_tags
        .iter()
        .find(|spec| spec.name == tag)
        .and_then(|spec| spec.description.clone());
      (tag.to_string(), Service::build(tag, description, &tagged, options))
    })
    .collect::<IndexMap<_, _>>();

  context.stats_mut().record_services(services.len());
  services
}
