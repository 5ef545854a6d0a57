use http::Method;
use indexmap::IndexMap;

use crate::generator::{
  context::BuildContext,
  errors::GenerationError,
  metrics::GenerationWarning,
  naming::method_name,
  operation::{Operation, OperationEntry},
};

/// Operations collected so far, keyed by their unique id.
#[derive(Debug, Default)]
struct RegistrationContext {
  entries: IndexMap<String, Operation>,
}

impl RegistrationContext {
  fn register(&mut self, operation: Operation) {
    self.entries.insert(operation.id.clone(), operation);
  }

  fn contains_id<S>(&self, id: S) -> bool
  where
    S: AsRef<str>,
  {
    self.entries.contains_key(id.as_ref())
  }

  fn into_entries(self) -> IndexMap<String, Operation> {
    self.entries
  }
}

/// Base id of an operation: its `operationId` in camelCase, or one derived from path and verb.
/// The flag tells whether the id was derived.
#[must_use]
pub(crate) fn compute_operation_id(method: &Method, path: &str, operation_id: Option<&str>) -> (String, bool) {
  match operation_id {
    Some(id) => (method_name(id), false),
    None => (
      method_name(&format!("{path}.{}", method.as_str().to_ascii_lowercase())),
      true,
    ),
  }
}

/// Appends `_1`, `_2`, ... to `base` until the id is free.
#[must_use]
pub(crate) fn ensure_unique_id(base: &str, is_taken: impl Fn(&str) -> bool) -> String {
  if !is_taken(base) {
    return base.to_string();
  }
  (1..)
    .map(|n| format!("{base}_{n}"))
    .find(|candidate| !is_taken(candidate))
    .unwrap_or_else(|| base.to_string())
}

/// Walks paths in document order and verbs in fixed order, assigning unique ids and building
/// every operation.
pub(crate) fn build_operations(context: &mut BuildContext<'_>) -> Result<IndexMap<String, Operation>, GenerationError> {
  let document = context.description().document();
  let mut registry = RegistrationContext::default();

  for (path, path_item) in &document.paths {
    for (method, spec) in path_item.methods() {
      let verb = method.as_str().to_ascii_lowercase();
      let (base_id, derived) = compute_operation_id(&method, path, spec.operation_id.as_deref());
      if derived {
        context.warn(GenerationWarning::MissingOperationId {
          path: path.clone(),
          method: verb.clone(),
          assumed_id: base_id.clone(),
        });
      }

      let id = ensure_unique_id(&base_id, |candidate| registry.contains_id(candidate));
      if id != base_id {
        context.warn(GenerationWarning::DuplicateOperationId {
          id: base_id.clone(),
          assigned_id: id.clone(),
          path: path.clone(),
          method: verb,
        });
      }

      let operation = Operation::build(
        OperationEntry {
          id,
          method,
          path: path.clone(),
          spec,
          path_item,
        },
        context,
      )?;
      context.stats_mut().record_operation(&operation);
      registry.register(operation);
    }
  }

  Ok(registry.into_entries())
}
