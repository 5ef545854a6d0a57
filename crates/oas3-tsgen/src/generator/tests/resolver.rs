use serde_json::json;

use super::support::description;
use crate::generator::{description::ParameterSpec, errors::GenerationError};

fn fixture() -> serde_json::Value {
  json!({
    "openapi": "3.0.3",
    "info": { "title": "t", "version": "1" },
    "servers": [{ "url": "https://example.com" }],
    "paths": {
      "/pets/{id}": { "get": { "responses": {} } }
    },
    "components": {
      "schemas": {
        "Pet": { "type": "object" },
        "a~b": { "type": "string" }
      },
      "parameters": {
        "Limit": { "name": "limit", "in": "query" },
        "Broken": { "in": "query" }
      }
    }
  })
}

#[test]
fn test_resolves_pointers() {
  let api = description(fixture());
  let resolver = api.resolver();

  let cases = [
    "Pet",
    "#/components/schemas/Pet",
    "/components/schemas/Pet",
    "#/paths/~1pets~1{id}/get",
    "#/components/schemas/a~0b",
    "#/servers/0",
  ];
  for pointer in cases {
    assert!(resolver.resolve(pointer).is_ok(), "failed for pointer {pointer:?}");
  }
}

#[test]
fn test_unresolved_pointers() {
  let api = description(fixture());
  let resolver = api.resolver();

  let cases = ["Missing", "#/components/schemas/Missing", "#/openapi", "#/servers/3", "#/info/title"];
  for pointer in cases {
    match resolver.resolve(pointer) {
      Err(GenerationError::UnresolvedReference { pointer: reported }) => {
        assert_eq!(reported, pointer, "failed for pointer {pointer:?}");
      }
      other => panic!("expected unresolved reference for {pointer:?}, got {other:?}"),
    }
  }
}

#[test]
fn test_resolve_as_typed_target() {
  let api = description(fixture());
  let resolver = api.resolver();

  let limit: ParameterSpec = resolver.resolve_as("#/components/parameters/Limit").unwrap();
  assert_eq!(limit.name, "limit");

  let broken = resolver.resolve_as::<ParameterSpec>("#/components/parameters/Broken");
  assert!(matches!(
    broken,
    Err(GenerationError::InvalidReferenceTarget { ref pointer, .. }) if pointer == "#/components/parameters/Broken"
  ));
}

#[test]
fn test_resolve_schema() {
  let api = description(fixture());
  let schema = api.resolver().resolve_schema("Pet").unwrap();
  assert_eq!(schema.type_name(), "object");
}
