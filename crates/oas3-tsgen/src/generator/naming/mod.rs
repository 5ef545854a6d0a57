pub mod identifiers;
pub mod literals;
pub mod namespaces;

pub use identifiers::{
  basic_chars, camel_case, enum_member_name, escape_identifier, file_name, method_name, split_words, type_name,
  upper_first,
};
pub use literals::quoted;
pub use namespaces::{
  model_class, model_file, namespace, qualified_name, service_class, simple_name, unqualified_name,
};

#[cfg(test)]
mod tests;
