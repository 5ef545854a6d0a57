use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::generator::{
  description::{SCHEMA_REF_PREFIX, SchemaNode},
  errors::GenerationError,
};

/// Walks internal `$ref` pointers against the raw description tree.
///
/// A bare name (no `/`) is shorthand for `#/components/schemas/<name>`. Every `#` or empty
/// segment restarts the walk at the document root, so `#/a/b` and `/a/b` both work.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceResolver<'a> {
  root: &'a Value,
}

impl<'a> ReferenceResolver<'a> {
  #[must_use]
  pub fn new(root: &'a Value) -> Self {
    Self { root }
  }

  pub fn resolve(&self, pointer: &str) -> Result<&'a Value, GenerationError> {
    let expanded = expand_pointer(pointer);
    let mut current = self.root;

    for segment in expanded.split('/').map(str::trim) {
      if segment == "#" || segment.is_empty() {
        current = self.root;
        continue;
      }
      let key = decode_segment(segment);
      let next = match current {
        Value::Object(map) => map.get(key.as_str()),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
      };
      current = next.ok_or_else(|| unresolved(pointer))?;
    }

    if current.is_object() {
      Ok(current)
    } else {
      Err(unresolved(pointer))
    }
  }

  pub fn resolve_as<T: DeserializeOwned>(&self, pointer: &str) -> Result<T, GenerationError> {
    let value = self.resolve(pointer)?;
    T::deserialize(value).map_err(|source| GenerationError::InvalidReferenceTarget {
      pointer: pointer.to_string(),
      source,
    })
  }

  pub fn resolve_schema(&self, pointer: &str) -> Result<SchemaNode, GenerationError> {
    self.resolve_as(pointer)
  }
}

fn expand_pointer(pointer: &str) -> String {
  if pointer.contains('/') {
    pointer.to_string()
  } else {
    format!("{SCHEMA_REF_PREFIX}{pointer}")
  }
}

fn decode_segment(segment: &str) -> String {
  segment.replace("~1", "/").replace("~0", "~")
}

fn unresolved(pointer: &str) -> GenerationError {
  GenerationError::UnresolvedReference {
    pointer: pointer.to_string(),
  }
}
