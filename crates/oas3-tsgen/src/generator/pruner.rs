use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use petgraph::{graphmap::DiGraphMap, visit::Dfs};

use crate::generator::{
  description::{AdditionalProperties, SchemaNode},
  metrics::GenerationStats,
  model::Model,
  service::Service,
  unit::GeneratedUnit,
};

/// Every schema name referenced anywhere inside `node`, regardless of position.
pub(crate) fn referenced_names(node: &SchemaNode, out: &mut BTreeSet<String>) {
  if let Some(name) = node.reference_name() {
    out.insert(name.to_string());
    return;
  }

  for member in node.one_of.iter().chain(&node.any_of).chain(&node.all_of) {
    referenced_names(member, out);
  }
  if let Some(items) = &node.items {
    referenced_names(items, out);
  }
  for property in node.properties.values() {
    referenced_names(property, out);
  }
  if let Some(AdditionalProperties::Schema(schema)) = &node.additional_properties {
    referenced_names(schema, out);
  }
}

/// Model-to-model reference edges.
pub(crate) fn model_dependencies(models: &IndexMap<String, Model>) -> BTreeMap<String, BTreeSet<String>> {
  models
    .iter()
    .map(|(name, model)| {
      let mut refs = BTreeSet::new();
      referenced_names(&model.schema, &mut refs);
      (name.clone(), refs)
    })
    .collect()
}

/// Transitive closure of `roots` over `dependencies`. Cycles terminate through the DFS visited set.
pub(crate) fn expand_with_dependencies(
  roots: &BTreeSet<String>,
  dependencies: &BTreeMap<String, BTreeSet<String>>,
) -> BTreeSet<String> {
  let mut graph = DiGraphMap::<&str, ()>::new();
  for (node, deps) in dependencies {
    graph.add_node(node.as_str());
    for dep in deps {
      graph.add_edge(node.as_str(), dep.as_str(), ());
    }
  }

  let mut expanded = roots.clone();
  for start in roots {
    if graph.contains_node(start.as_str()) {
      let mut dfs = Dfs::new(&graph, start.as_str());
      while let Some(node) = dfs.next(&graph) {
        expanded.insert(node.to_string());
      }
    }
  }
  expanded
}

/// Names of the models reachable from any service.
#[must_use]
pub fn used_models(models: &IndexMap<String, Model>, services: &IndexMap<String, Service>) -> BTreeSet<String> {
  let roots = services
    .values()
    .flat_map(|service| service.referenced_models())
    .map(str::to_string)
    .collect::<BTreeSet<_>>();
  expand_with_dependencies(&roots, &model_dependencies(models))
}

/// Removes models no service reaches, recording a warning for each. Returns the removed names.
pub fn prune_unused_models(
  models: &mut IndexMap<String, Model>,
  services: &IndexMap<String, Service>,
  stats: &mut GenerationStats,
) -> Vec<String> {
  let used = used_models(models, services);
  let unused = models
    .keys()
    .filter(|name| !used.contains(name.as_str()))
    .cloned()
    .collect::<Vec<_>>();

  for name in &unused {
    models.shift_remove(name);
    stats.record_pruned_model(name);
  }
  unused
}
