use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::generator::{
  EnumStyle,
  context::BuildContext,
  description::SchemaNode,
  errors::GenerationError,
  imports::{DependencyCollector, Import, ImportScope},
  naming::{enum_member_name, escape_identifier, quoted, unqualified_name},
  type_synth::TypeContext,
  unit::{GeneratedUnit, UnitIdentity},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EnumKind {
  String,
  Number,
  Integer,
}

impl EnumKind {
  #[must_use]
  pub fn from_type(type_name: &str) -> Option<Self> {
    match type_name {
      "string" => Some(Self::String),
      "number" => Some(Self::Number),
      "integer" => Some(Self::Integer),
      _ => None,
    }
  }
}

/// One member of an enum model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValue {
  pub kind: EnumKind,
  pub name: String,
  /// Literal text: quoted for string enums, raw otherwise.
  pub value: String,
}

impl EnumValue {
  #[must_use]
  pub fn new(kind: EnumKind, explicit_name: Option<&str>, value: &Value, style: EnumStyle) -> Self {
    let raw = match value {
      Value::String(text) => text.clone(),
      other => other.to_string(),
    };
    let name = match explicit_name {
      Some(name) => name.to_string(),
      None => enum_member_name(&raw, style),
    };
    let value = match kind {
      EnumKind::String => quoted(&raw),
      EnumKind::Number | EnumKind::Integer => raw,
    };
    Self { kind, name, value }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
  pub name: String,
  /// Key as written in a type literal.
  pub identifier: String,
  pub type_expr: String,
  pub required: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub deprecated: bool,
}

/// A named schema from `components.schemas`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
  #[serde(flatten)]
  pub identity: UnitIdentity,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub deprecated: bool,
  pub is_enum: bool,
  pub is_simple: bool,
  pub simple_type: String,
  pub enum_values: Vec<EnumValue>,
  pub properties: Vec<Property>,
  pub imports: Vec<Import>,
  pub additional_dependencies: Vec<String>,
  #[serde(skip)]
  pub schema: SchemaNode,
}

impl Model {
  pub fn build(name: &str, schema: &SchemaNode, context: &BuildContext<'_>) -> Result<Self, GenerationError> {
    let options = context.options();
    let identity = UnitIdentity::new(name, unqualified_name(name, options));
    let type_context = TypeContext {
      name,
      type_name: &identity.type_name,
    };

    let enum_values = match EnumKind::from_type(schema.type_name()) {
      Some(kind) if options.enum_style != EnumStyle::Alias => schema
        .enum_values
        .iter()
        .enumerate()
        .map(|(i, value)| {
          EnumValue::new(
            kind,
            schema.enum_names.get(i).map(String::as_str),
            value,
            options.enum_style,
          )
        })
        .collect(),
      _ => vec![],
    };

    let synthesizer = context.synthesizer();
    let simple_type = synthesizer.type_of(Some(schema), Some(type_context));

    let mut properties = Vec::with_capacity(schema.properties.len());
    for (property_name, property_schema) in &schema.properties {
      let mut type_expr = synthesizer.type_of(Some(property_schema), Some(type_context));
      if let Some(pointer) = &property_schema.reference
        && !property_schema.is_nullable()
        && context.resolver().resolve_schema(pointer)?.nullable
      {
        type_expr.push_str(" | null");
      }
      properties.push(Property {
        name: property_name.clone(),
        identifier: escape_identifier(property_name),
        type_expr,
        required: schema.required.contains(property_name),
        description: property_schema.description.clone(),
        deprecated: property_schema.deprecated,
      });
    }

    let mut collector = DependencyCollector::new(ImportScope::for_model(&identity), options);
    collector.collect(Some(schema), false);
    let dependencies = collector.finish();

    let is_enum = !enum_values.is_empty();
    Ok(Self {
      identity,
      description: schema.description.clone(),
      deprecated: schema.deprecated,
      is_enum,
      is_simple: !is_enum,
      simple_type,
      enum_values,
      properties,
      imports: dependencies.imports,
      additional_dependencies: dependencies.additional_dependencies,
      schema: schema.clone(),
    })
  }
}

impl GeneratedUnit for Model {
  fn identity(&self) -> &UnitIdentity {
    &self.identity
  }

  fn imports(&self) -> &[Import] {
    &self.imports
  }

  fn additional_dependencies(&self) -> &[String] {
    &self.additional_dependencies
  }
}

/// Builds one model per `components.schemas` entry, in declaration order.
pub(crate) fn build_models(context: &mut BuildContext<'_>) -> Result<IndexMap<String, Model>, GenerationError> {
  let schemas = &context.description().document().components.schemas;
  let mut models = IndexMap::with_capacity(schemas.len());

  for (name, schema) in schemas {
    let model = Model::build(name, schema, context)?;
    context.stats_mut().record_model(&model);
    models.insert(name.clone(), model);
  }

  Ok(models)
}
