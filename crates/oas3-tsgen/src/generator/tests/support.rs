use serde_json::{Value, json};

use crate::generator::{
  GeneratorOptions,
  description::{ApiDescription, SchemaNode},
  orchestrator::{GenerationOutput, Orchestrator},
};

pub(super) fn description(value: Value) -> ApiDescription {
  ApiDescription::from_value(value).expect("test description should parse")
}

pub(super) fn schema(value: Value) -> SchemaNode {
  serde_json::from_value(value).expect("test schema should parse")
}

pub(super) fn build(value: Value, options: GeneratorOptions) -> GenerationOutput {
  Orchestrator::new(description(value), options)
    .build()
    .expect("generation should succeed")
}

pub(super) fn keep_all() -> GeneratorOptions {
  GeneratorOptions::builder().ignore_unused_models(false).build()
}

pub(super) fn document(paths: Value, schemas: Value) -> Value {
  json!({
    "openapi": "3.0.3",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": paths,
    "components": { "schemas": schemas }
  })
}

/// A small pet store with namespaced models, an error model, an unused model and a cycle.
pub(super) fn petstore() -> Value {
  json!({
    "openapi": "3.0.3",
    "info": { "title": "Pet Store", "version": "1.0.0" },
    "servers": [
      {
        "url": "https://{env}.example.com/{version}",
        "variables": {
          "env": { "default": "api" },
          "version": { "default": "v1" }
        }
      }
    ],
    "tags": [
      { "name": "pets", "description": "Everything about pets" },
      { "name": "store" }
    ],
    "security": [ { "apiKey": [] } ],
    "paths": {
      "/pets": {
        "get": {
          "tags": ["pets"],
          "operationId": "listPets",
          "parameters": [
            { "$ref": "#/components/parameters/Limit" },
            { "name": "session", "in": "cookie", "schema": { "type": "string" } }
          ],
          "responses": {
            "200": {
              "description": "ok",
              "content": {
                "application/json": {
                  "schema": { "type": "array", "items": { "$ref": "#/components/schemas/pets.Pet" } }
                }
              }
            },
            "default": {
              "description": "error",
              "content": {
                "application/json": { "schema": { "$ref": "#/components/schemas/Error" } }
              }
            }
          }
        },
        "post": {
          "tags": ["pets", "store"],
          "operationId": "addPet",
          "requestBody": {
            "required": true,
            "content": {
              "application/json": { "schema": { "$ref": "#/components/schemas/pets.Pet" } },
              "application/xml": { "schema": { "$ref": "#/components/schemas/pets.Pet" } }
            }
          },
          "responses": {
            "201": { "description": "created" }
          }
        }
      },
      "/pets/{petId}": {
        "parameters": [
          { "name": "petId", "in": "path", "schema": { "type": "integer", "format": "int64" } }
        ],
        "get": {
          "tags": ["pets"],
          "operationId": "showPetById",
          "x-operation-name": "getPet",
          "security": [],
          "responses": {
            "200": {
              "description": "ok",
              "content": {
                "application/json": { "schema": { "$ref": "#/components/schemas/pets.Pet" } },
                "text/plain": { "schema": { "type": "string" } }
              }
            }
          }
        }
      },
      "/store/inventory": {
        "get": {
          "responses": {
            "200": {
              "description": "ok",
              "content": {
                "application/json": {
                  "schema": { "type": "object", "additionalProperties": { "type": "integer" } }
                }
              }
            }
          }
        }
      }
    },
    "components": {
      "parameters": {
        "Limit": { "name": "limit", "in": "query", "schema": { "type": "integer" } }
      },
      "securitySchemes": {
        "apiKey": { "type": "apiKey", "name": "X-Api-Key", "in": "header" }
      },
      "schemas": {
        "pets.Pet": {
          "type": "object",
          "required": ["id", "name"],
          "properties": {
            "id": { "type": "integer", "format": "int64" },
            "name": { "type": "string" },
            "status": { "$ref": "#/components/schemas/PetStatus" },
            "tags": { "type": "array", "items": { "$ref": "#/components/schemas/Tag" } },
            "owner": { "$ref": "#/components/schemas/Owner" }
          }
        },
        "PetStatus": { "type": "string", "enum": ["available", "pending", "sold"] },
        "Tag": {
          "type": "object",
          "properties": { "id": { "type": "integer" }, "label": { "type": "string" } }
        },
        "Owner": {
          "type": "object",
          "nullable": true,
          "properties": { "name": { "type": "string" } }
        },
        "Error": {
          "type": "object",
          "required": ["code"],
          "properties": { "code": { "type": "integer" }, "message": { "type": "string" } }
        },
        "Orphan": { "type": "string" },
        "CycleA": {
          "type": "object",
          "properties": { "b": { "$ref": "#/components/schemas/CycleB" } }
        },
        "CycleB": {
          "type": "object",
          "properties": { "a": { "$ref": "#/components/schemas/CycleA" } }
        }
      }
    }
  })
}
