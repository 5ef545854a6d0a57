//! Renders a [`SchemaNode`] as a TypeScript type expression.

use itertools::Itertools;
use serde_json::Value;

use crate::generator::{
  GeneratorOptions,
  description::SchemaNode,
  naming::{escape_identifier, qualified_name, quoted},
};

pub const UNKNOWN_TYPE: &str = "any";
pub const BINARY_TYPE: &str = "Blob";
pub const VOID_TYPE: &str = "void";

/// The named model whose definition is being rendered.
///
/// A reference back to it renders as its own type name instead of the qualified name.
#[derive(Debug, Clone, Copy)]
pub struct TypeContext<'a> {
  pub name: &'a str,
  pub type_name: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct TypeSynthesizer<'o> {
  options: &'o GeneratorOptions,
}

impl<'o> TypeSynthesizer<'o> {
  #[must_use]
  pub fn new(options: &'o GeneratorOptions) -> Self {
    Self { options }
  }

  /// Type expression for `node`. An absent schema is `any`; a nullable one is `null | T`.
  #[must_use]
  pub fn type_of(&self, node: Option<&SchemaNode>, context: Option<TypeContext<'_>>) -> String {
    let Some(node) = node else {
      return UNKNOWN_TYPE.to_string();
    };

    let shape = self.shape_of(node, context);
    if node.is_nullable() {
      let shape = if node.needs_grouping() { format!("({shape})") } else { shape };
      format!("null | {shape}")
    } else {
      shape
    }
  }

  fn member(&self, node: &SchemaNode, context: Option<TypeContext<'_>>) -> String {
    let rendered = self.type_of(Some(node), context);
    if node.needs_grouping() || node.is_nullable() {
      format!("({rendered})")
    } else {
      rendered
    }
  }

  fn shape_of(&self, node: &SchemaNode, context: Option<TypeContext<'_>>) -> String {
    if let Some(name) = node.reference_name() {
      return match context {
        Some(ctx) if ctx.name == name => ctx.type_name.to_string(),
        _ => qualified_name(name, self.options),
      };
    }

    if node.is_binary() {
      return BINARY_TYPE.to_string();
    }

    let type_name = node.type_name();
    if !node.enum_values.is_empty() {
      let numeric = matches!(type_name, "number" | "integer");
      return node
        .enum_values
        .iter()
        .map(|value| enum_literal(value, numeric))
        .join(" | ");
    }

    let mut result = String::new();
    if node.is_array() {
      result = format!("Array<{}>", self.type_of(node.items.as_deref(), context));
    } else if node.has_record_shape() {
      result = self.record_of(node, context);
    }

    let union = node.union_members();
    if !union.is_empty() {
      let members = self.join_members(union, " | ", context);
      let grouped = union.len() > 1 && (!result.is_empty() || !node.all_of.is_empty());
      let members = if grouped { format!("({members})") } else { members };
      result = if result.is_empty() { members } else { format!("{result} & {members}") };
    }

    if !node.all_of.is_empty() {
      if !result.is_empty() {
        result.push_str(" & ");
      }
      result.push_str(&self.join_members(&node.all_of, " & ", context));
    }

    if !result.is_empty() {
      return result;
    }

    match type_name {
      "object" => "{}".to_string(),
      "integer" => "number".to_string(),
      other => other.to_string(),
    }
  }

  fn join_members(&self, members: &[SchemaNode], separator: &str, context: Option<TypeContext<'_>>) -> String {
    members
      .iter()
      .map(|member| self.member(member, context))
      .join(separator)
  }

  fn record_of(&self, node: &SchemaNode, context: Option<TypeContext<'_>>) -> String {
    let mut fields = node
      .properties
      .iter()
      .map(|(name, property)| {
        let optional = if node.required.contains(name) { "" } else { "?" };
        format!(
          "{}{optional}: {}",
          escape_identifier(name),
          self.type_of(Some(property), context)
        )
      })
      .collect::<Vec<_>>();

    if let Some(additional) = node.additional_schema() {
      fields.push(format!("[key: string]: {}", self.type_of(additional, context)));
    }

    if fields.is_empty() {
      "{}".to_string()
    } else {
      format!("{{ {} }}", fields.join(", "))
    }
  }
}

/// Literal for one enum value. Numeric enums and non-string values render raw.
pub(crate) fn enum_literal(value: &Value, numeric: bool) -> String {
  match value {
    Value::String(text) if numeric => text.clone(),
    Value::String(text) => quoted(text),
    other => other.to_string(),
  }
}
