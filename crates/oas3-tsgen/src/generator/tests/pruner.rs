use std::collections::{BTreeMap, BTreeSet};

use serde_json::json;

use super::support::{build, keep_all, petstore, schema};
use crate::generator::{
  GeneratorOptions,
  metrics::{GenerationStats, GenerationWarning},
  pruner::{expand_with_dependencies, prune_unused_models, referenced_names},
};

fn set(values: &[&str]) -> BTreeSet<String> {
  values.iter().map(|value| (*value).to_string()).collect()
}

#[test]
fn test_referenced_names_descends_everywhere() {
  let node = schema(json!({
    "oneOf": [{ "$ref": "#/components/schemas/A" }],
    "anyOf": [{ "$ref": "#/components/schemas/B" }],
    "allOf": [{ "$ref": "#/components/schemas/C" }],
    "items": { "$ref": "#/components/schemas/D" },
    "properties": {
      "e": { "oneOf": [{ "$ref": "#/components/schemas/E" }] }
    },
    "additionalProperties": { "$ref": "#/components/schemas/F" }
  }));

  let mut names = BTreeSet::new();
  referenced_names(&node, &mut names);
  assert_eq!(names, set(&["A", "B", "C", "D", "E", "F"]));
}

#[test]
fn test_expand_with_dependencies_handles_cycles() {
  let dependencies = BTreeMap::from([
    ("A".to_string(), set(&["B"])),
    ("B".to_string(), set(&["A", "C"])),
    ("C".to_string(), set(&[])),
    ("D".to_string(), set(&["A"])),
  ]);

  assert_eq!(expand_with_dependencies(&set(&["A"]), &dependencies), set(&["A", "B", "C"]));
  assert_eq!(expand_with_dependencies(&set(&["Z"]), &dependencies), set(&["Z"]));
}

#[test]
fn test_unused_models_are_pruned() {
  let output = build(petstore(), GeneratorOptions::default());

  assert_eq!(
    output.model.models().keys().collect::<Vec<_>>(),
    ["pets.Pet", "PetStatus", "Tag", "Owner", "Error"]
  );
  assert_eq!(output.stats.models_pruned, 3);
  for model in ["Orphan", "CycleA", "CycleB"] {
    assert!(
      output.stats.warnings.contains(&GenerationWarning::UnusedModel {
        model: model.to_string()
      }),
      "missing warning for {model}"
    );
  }
}

#[test]
fn test_pruning_can_be_disabled() {
  let output = build(petstore(), keep_all());

  assert_eq!(output.model.models().len(), 8);
  assert_eq!(output.stats.models_pruned, 0);
}

#[test]
fn test_pruning_is_a_fixed_point() {
  let output = build(petstore(), keep_all());
  let mut models = output.model.models().clone();
  let services = output.model.services();
  let mut stats = GenerationStats::default();

  let first = prune_unused_models(&mut models, services, &mut stats);
  assert_eq!(first, ["Orphan", "CycleA", "CycleB"]);

  let snapshot = models.clone();
  let second = prune_unused_models(&mut models, services, &mut stats);
  assert!(second.is_empty());
  assert_eq!(models, snapshot);
  assert_eq!(stats.models_pruned, 3);
}
