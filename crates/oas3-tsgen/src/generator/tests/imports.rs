use serde_json::json;

use super::support::schema;
use crate::generator::{
  GeneratorOptions,
  imports::{DependencyCollector, Import, ImportScope},
  naming::unqualified_name,
  unit::UnitIdentity,
};

fn names(imports: &[Import]) -> Vec<&str> {
  imports.iter().map(|import| import.name.as_str()).collect()
}

#[test]
fn test_import_fields() {
  let options = GeneratorOptions::default();

  let plain = Import::new("Pet", "../models/", &options);
  assert_eq!(plain.type_name, "Pet");
  assert_eq!(plain.qualified_name, "Pet");
  assert!(!plain.use_alias);
  assert_eq!(plain.file, "../models/pet");

  let namespaced = Import::new("pets.Pet", "../models/", &options);
  assert_eq!(namespaced.type_name, "Pet");
  assert_eq!(namespaced.qualified_name, "PetsPet");
  assert!(namespaced.use_alias);
  assert_eq!(namespaced.file, "../models/pets/pet");
}

#[test]
fn test_model_scope_paths() {
  let options = GeneratorOptions::default();
  let cases = [("Pet", "./"), ("pets.Pet", "../"), ("a.b.Pet", "../../")];
  for (name, expected) in cases {
    let identity = UnitIdentity::new(name, unqualified_name(name, &options));
    assert_eq!(
      ImportScope::for_model(&identity).path_to_models(),
      expected,
      "failed for input {name:?}"
    );
  }
  assert_eq!(ImportScope::for_service().path_to_models(), "../models/");
}

#[test]
fn test_collects_references_from_every_position() {
  let options = GeneratorOptions::default();
  let identity = UnitIdentity::new("Owner", "Owner".to_string());
  let node = schema(json!({
    "type": "object",
    "properties": {
      "pet": { "$ref": "#/components/schemas/Pet" },
      "self": { "$ref": "#/components/schemas/Owner" },
      "choice": { "oneOf": [{ "$ref": "#/components/schemas/Dog" }, { "$ref": "#/components/schemas/Cat" }] },
      "tags": { "type": "array", "items": { "$ref": "#/components/schemas/Tag" } },
      "extra": { "type": "object", "additionalProperties": { "$ref": "#/components/schemas/Meta" } }
    }
  }));

  let mut collector = DependencyCollector::new(ImportScope::for_model(&identity), &options);
  collector.collect(Some(&node), false);
  let collected = collector.finish();

  assert_eq!(names(&collected.imports), ["Cat", "Dog", "Meta", "Pet", "Tag"]);
  assert!(collected.additional_dependencies.is_empty());
  assert_eq!(collected.imports[3].file, "./pet");
}

#[test]
fn test_top_level_one_of_is_strict() {
  let options = GeneratorOptions::default();
  let node = schema(json!({
    "oneOf": [{ "$ref": "#/components/schemas/Dog" }, { "$ref": "#/components/schemas/Cat" }],
    "allOf": [{ "$ref": "#/components/schemas/Base" }]
  }));

  let mut collector = DependencyCollector::new(ImportScope::for_service(), &options);
  collector.collect(Some(&node), false);
  let collected = collector.finish();

  assert_eq!(names(&collected.imports), ["Base", "Cat", "Dog"]);
  assert!(collected.additional_dependencies.is_empty());
}

#[test]
fn test_additional_excludes_strict_imports() {
  let options = GeneratorOptions::default();
  let pet = schema(json!({ "$ref": "#/components/schemas/Pet" }));
  let error = schema(json!({ "$ref": "#/components/schemas/Error" }));

  let mut collector = DependencyCollector::new(ImportScope::for_service(), &options);
  collector.collect(Some(&pet), true);
  collector.collect(Some(&error), true);
  collector.collect(Some(&pet), false);
  collector.collect(None, false);
  let collected = collector.finish();

  assert_eq!(names(&collected.imports), ["Pet"]);
  assert_eq!(collected.additional_dependencies, ["Error"]);
}

#[test]
fn test_property_one_of_members_follow_caller_flag() {
  let options = GeneratorOptions::default();
  let node = schema(json!({
    "type": "object",
    "properties": {
      "pet": { "oneOf": [{ "$ref": "#/components/schemas/Dog" }, { "$ref": "#/components/schemas/Cat" }] }
    }
  }));

  let mut strict = DependencyCollector::new(ImportScope::for_service(), &options);
  strict.collect(Some(&node), false);
  let collected = strict.finish();
  assert_eq!(names(&collected.imports), ["Cat", "Dog"]);
  assert!(collected.additional_dependencies.is_empty());

  let mut additional = DependencyCollector::new(ImportScope::for_service(), &options);
  additional.collect(Some(&node), true);
  let collected = additional.finish();
  assert!(collected.imports.is_empty());
  assert_eq!(collected.additional_dependencies, ["Cat", "Dog"]);
}
