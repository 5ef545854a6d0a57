use crate::generator::{
  GeneratorOptions,
  naming::identifiers::{file_name, type_name},
};

/// Last segment of a `/`-separated pointer.
#[must_use]
pub fn simple_name(pointer: &str) -> &str {
  pointer.rsplit('/').next().unwrap_or(pointer)
}

/// Directory part of a dotted name: everything before the last interior `.`, with dots turned
/// into `/`. `None` when the name has no interior dot.
#[must_use]
pub fn namespace(name: &str) -> Option<String> {
  let trimmed = name.trim_matches('.');
  let pos = trimmed.rfind('.')?;
  Some(trimmed[..pos].replace('.', "/"))
}

#[must_use]
pub fn model_class(base: &str, options: &GeneratorOptions) -> String {
  format!("{}{}{}", options.model_prefix, type_name(base), options.model_suffix)
}

#[must_use]
pub fn service_class(base: &str, options: &GeneratorOptions) -> String {
  format!(
    "{}{}{}",
    options.service_prefix,
    type_name(base),
    options.service_suffix
  )
}

/// Class name of a model without its namespace.
#[must_use]
pub fn unqualified_name(name: &str, options: &GeneratorOptions) -> String {
  let base = name.rsplit('.').next().unwrap_or(name);
  model_class(base, options)
}

/// Class name of a model with its namespace folded in, unique across the whole model set.
#[must_use]
pub fn qualified_name(name: &str, options: &GeneratorOptions) -> String {
  let unqualified = unqualified_name(name, options);
  match namespace(name) {
    Some(ns) => format!("{}{unqualified}", type_name(&ns)),
    None => unqualified,
  }
}

/// Relative import path of a model file, without extension.
#[must_use]
pub fn model_file(path_to_models: &str, name: &str, options: &GeneratorOptions) -> String {
  let mut dir = path_to_models.strip_suffix('/').unwrap_or(path_to_models).to_string();
  if let Some(ns) = namespace(name) {
    dir.push('/');
    dir.push_str(&ns);
  }
  format!("{dir}/{}", file_name(&unqualified_name(name, options)))
}
