//! Typed view over a loaded OpenAPI 3 description.
//!
//! The raw `serde_json::Value` tree is kept next to the typed [`Document`] so that
//! internal `$ref` pointers can be walked segment by segment (see
//! [`ReferenceResolver`](crate::generator::resolver::ReferenceResolver)), while the rest of the
//! pipeline works against strongly typed nodes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::generator::{errors::GenerationError, naming::simple_name, resolver::ReferenceResolver};

pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";
pub const SECURITY_SCHEME_REF_PREFIX: &str = "#/components/securitySchemes/";

/// A fully loaded description: raw tree plus typed document.
#[derive(Debug, Clone)]
pub struct ApiDescription {
  raw: Value,
  document: Document,
}

impl ApiDescription {
  pub fn from_value(raw: Value) -> Result<Self, GenerationError> {
    let document = Document::deserialize(&raw).map_err(GenerationError::InvalidDescription)?;
    Ok(Self { raw, document })
  }

  pub fn from_json(text: &str) -> Result<Self, GenerationError> {
    let raw = serde_json::from_str::<Value>(text).map_err(GenerationError::InvalidDescription)?;
    Self::from_value(raw)
  }

  pub fn from_json_slice(bytes: &[u8]) -> Result<Self, GenerationError> {
    let raw = serde_json::from_slice::<Value>(bytes).map_err(GenerationError::InvalidDescription)?;
    Self::from_value(raw)
  }

  /// YAML mappings may use non-string keys (`200:` for status codes), so the YAML tree is
  /// normalized into a JSON tree with stringified keys before typing it.
  pub fn from_yaml(text: &str) -> Result<Self, GenerationError> {
    let yaml = serde_yaml::from_str::<serde_yaml::Value>(text)?;
    Self::from_value(yaml_to_json(yaml))
  }

  #[must_use]
  pub fn raw(&self) -> &Value {
    &self.raw
  }

  #[must_use]
  pub fn document(&self) -> &Document {
    &self.document
  }

  #[must_use]
  pub fn resolver(&self) -> ReferenceResolver<'_> {
    ReferenceResolver::new(&self.raw)
  }
}

fn yaml_to_json(value: serde_yaml::Value) -> Value {
  use serde_yaml::Value as Yaml;

  match value {
    Yaml::Null => Value::Null,
    Yaml::Bool(b) => Value::Bool(b),
    Yaml::Number(n) => {
      if let Some(i) = n.as_i64() {
        Value::from(i)
      } else if let Some(u) = n.as_u64() {
        Value::from(u)
      } else {
        n.as_f64()
          .and_then(serde_json::Number::from_f64)
          .map_or(Value::Null, Value::Number)
      }
    }
    Yaml::String(s) => Value::String(s),
    Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
    Yaml::Mapping(map) => Value::Object(map.into_iter().map(|(k, v)| (yaml_key(k), yaml_to_json(v))).collect()),
    Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
  }
}

fn yaml_key(key: serde_yaml::Value) -> String {
  match key {
    serde_yaml::Value::String(s) => s,
    serde_yaml::Value::Number(n) => n.to_string(),
    serde_yaml::Value::Bool(b) => b.to_string(),
    serde_yaml::Value::Null => "null".to_string(),
    other => serde_yaml::to_string(&other).unwrap_or_default().trim().to_string(),
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
  #[serde(default)]
  pub openapi: String,
  #[serde(default)]
  pub info: InfoSpec,
  #[serde(default)]
  pub servers: Vec<ServerSpec>,
  #[serde(default)]
  pub paths: IndexMap<String, PathItem>,
  #[serde(default)]
  pub components: Components,
  #[serde(default)]
  pub tags: Vec<TagSpec>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub security: Option<Vec<SecurityRequirement>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InfoSpec {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub version: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ServerSpec {
  #[serde(default)]
  pub url: String,
  #[serde(default)]
  pub variables: IndexMap<String, ServerVariableSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ServerVariableSpec {
  #[serde(default)]
  pub default: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TagSpec {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Components {
  #[serde(default)]
  pub schemas: IndexMap<String, SchemaNode>,
}

/// Scheme name to required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Either an inline object or an internal `$ref` to one.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RefOr<T> {
  Ref {
    #[serde(rename = "$ref")]
    pointer: String,
  },
  Item(T),
}

impl<T> RefOr<T>
where
  T: Clone + serde::de::DeserializeOwned,
{
  pub fn resolve(&self, resolver: &ReferenceResolver<'_>) -> Result<T, GenerationError> {
    match self {
      Self::Ref { pointer } => resolver.resolve_as(pointer),
      Self::Item(item) => Ok(item.clone()),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PathItem {
  #[serde(default)]
  pub parameters: Vec<RefOr<ParameterSpec>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub get: Option<OperationSpec>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub put: Option<OperationSpec>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub post: Option<OperationSpec>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub delete: Option<OperationSpec>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub options: Option<OperationSpec>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub head: Option<OperationSpec>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub patch: Option<OperationSpec>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub trace: Option<OperationSpec>,
}

impl PathItem {
  /// Declared operations in the fixed verb order used for id assignment.
  pub fn methods(&self) -> impl Iterator<Item = (http::Method, &OperationSpec)> {
    [
      (http::Method::GET, &self.get),
      (http::Method::PUT, &self.put),
      (http::Method::POST, &self.post),
      (http::Method::DELETE, &self.delete),
      (http::Method::OPTIONS, &self.options),
      (http::Method::HEAD, &self.head),
      (http::Method::PATCH, &self.patch),
      (http::Method::TRACE, &self.trace),
    ]
    .into_iter()
    .filter_map(|(method, spec)| spec.as_ref().map(|spec| (method, spec)))
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSpec {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub operation_id: Option<String>,
  #[serde(rename = "x-operation-name", default, skip_serializing_if = "Option::is_none")]
  pub operation_name: Option<String>,
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub deprecated: bool,
  #[serde(default)]
  pub parameters: Vec<RefOr<ParameterSpec>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub request_body: Option<RefOr<RequestBodySpec>>,
  #[serde(default)]
  pub responses: IndexMap<String, RefOr<ResponseSpec>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub security: Option<Vec<SecurityRequirement>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParameterLocation {
  Path,
  #[default]
  Query,
  Header,
  Cookie,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ParameterSpec {
  pub name: String,
  #[serde(rename = "in", default)]
  pub location: ParameterLocation,
  #[serde(default)]
  pub required: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub schema: Option<SchemaNode>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub style: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub explode: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub deprecated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RequestBodySpec {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub content: IndexMap<String, MediaTypeSpec>,
  #[serde(default)]
  pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ResponseSpec {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub content: IndexMap<String, MediaTypeSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MediaTypeSpec {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub schema: Option<SchemaNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SecuritySchemeSpec {
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub scheme_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
  pub location: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub schema: Option<SchemaNode>,
}

/// `type` is a single name in OpenAPI 3.0 and may be a list in 3.1.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SchemaTypeSet {
  Single(String),
  Multiple(Vec<String>),
}

impl SchemaTypeSet {
  #[must_use]
  pub fn primary(&self) -> Option<&str> {
    match self {
      Self::Single(name) => Some(name.as_str()),
      Self::Multiple(names) => names.iter().map(String::as_str).find(|name| *name != "null"),
    }
  }

  #[must_use]
  pub fn includes_null(&self) -> bool {
    match self {
      Self::Single(_) => false,
      Self::Multiple(names) => names.iter().any(|name| name == "null"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
  Allowed(bool),
  Schema(Box<SchemaNode>),
}

/// Structural discriminant computed from which fields a [`SchemaNode`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
  Reference,
  Binary,
  Enum,
  Array,
  Object,
  Composite,
  Primitive,
  Any,
}

/// One schema definition. Fields are optional; [`SchemaNode::kind`] tells which ones matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
  #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
  pub reference: Option<String>,
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub schema_type: Option<SchemaTypeSet>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub format: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub items: Option<Box<SchemaNode>>,
  #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
  pub properties: IndexMap<String, SchemaNode>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub required: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub additional_properties: Option<AdditionalProperties>,
  #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
  pub enum_values: Vec<Value>,
  #[serde(rename = "x-enumNames", default, skip_serializing_if = "Vec::is_empty")]
  pub enum_names: Vec<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub one_of: Vec<SchemaNode>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub any_of: Vec<SchemaNode>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub all_of: Vec<SchemaNode>,
  #[serde(default)]
  pub nullable: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub deprecated: bool,
}

impl SchemaNode {
  #[must_use]
  pub fn reference(pointer: impl Into<String>) -> Self {
    Self {
      reference: Some(pointer.into()),
      ..Default::default()
    }
  }

  #[must_use]
  pub fn of_type(name: impl Into<String>) -> Self {
    Self {
      schema_type: Some(SchemaTypeSet::Single(name.into())),
      ..Default::default()
    }
  }

  /// Name of the referenced definition, i.e. the last pointer segment.
  #[must_use]
  pub fn reference_name(&self) -> Option<&str> {
    self.reference.as_deref().map(simple_name)
  }

  /// Declared type, `"any"` when absent.
  #[must_use]
  pub fn type_name(&self) -> &str {
    self.schema_type.as_ref().and_then(SchemaTypeSet::primary).unwrap_or("any")
  }

  #[must_use]
  pub fn is_nullable(&self) -> bool {
    self.nullable || self.schema_type.as_ref().is_some_and(SchemaTypeSet::includes_null)
  }

  #[must_use]
  pub fn is_binary(&self) -> bool {
    self.type_name() == "string" && self.format.as_deref() == Some("binary")
  }

  #[must_use]
  pub fn is_array(&self) -> bool {
    self.type_name() == "array" || self.items.is_some()
  }

  #[must_use]
  pub fn has_record_shape(&self) -> bool {
    !self.properties.is_empty() || self.additional_schema().is_some()
  }

  /// The value schema of the index signature, if one should be emitted.
  /// `true` maps to an untyped schema, `false` to none.
  #[must_use]
  pub fn additional_schema(&self) -> Option<Option<&SchemaNode>> {
    match &self.additional_properties {
      Some(AdditionalProperties::Allowed(true)) => Some(None),
      Some(AdditionalProperties::Schema(schema)) => Some(Some(schema.as_ref())),
      Some(AdditionalProperties::Allowed(false)) | None => None,
    }
  }

  /// `oneOf` members when present, otherwise `anyOf` members.
  #[must_use]
  pub fn union_members(&self) -> &[SchemaNode] {
    if self.one_of.is_empty() { &self.any_of } else { &self.one_of }
  }

  #[must_use]
  pub fn has_composites(&self) -> bool {
    !self.one_of.is_empty() || !self.any_of.is_empty() || !self.all_of.is_empty()
  }

  /// Whether the synthesized expression is an operator list (union, intersection or literal set)
  /// that must be parenthesized when nested.
  #[must_use]
  pub fn needs_grouping(&self) -> bool {
    self.reference.is_none() && (self.has_composites() || !self.enum_values.is_empty())
  }

  #[must_use]
  pub fn kind(&self) -> SchemaKind {
    if self.reference.is_some() {
      SchemaKind::Reference
    } else if self.is_binary() {
      SchemaKind::Binary
    } else if !self.enum_values.is_empty() {
      SchemaKind::Enum
    } else if self.is_array() {
      SchemaKind::Array
    } else if self.has_record_shape() {
      SchemaKind::Object
    } else if self.has_composites() {
      SchemaKind::Composite
    } else {
      match self.schema_type.as_ref().and_then(SchemaTypeSet::primary) {
        Some("object") => SchemaKind::Object,
        Some(_) => SchemaKind::Primitive,
        None => SchemaKind::Any,
      }
    }
  }
}
