use std::sync::LazyLock;

use http::Method;
use regex::{Captures, Regex};
use serde::{Serialize, Serializer};

use crate::generator::{
  context::BuildContext,
  description::{
    MediaTypeSpec, OperationSpec, ParameterLocation, ParameterSpec, PathItem, RefOr, RequestBodySpec,
    SECURITY_SCHEME_REF_PREFIX, SchemaNode, SecurityRequirement, SecuritySchemeSpec,
  },
  errors::GenerationError,
  metrics::GenerationWarning,
  naming::{escape_identifier, method_name, upper_first},
  type_synth::TypeSynthesizer,
  variants::{OperationVariant, VariantCalculator},
};

static PATH_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
  pub name: String,
  /// Accessor used in generated code, bare or quoted.
  pub identifier: String,
  #[serde(rename = "in")]
  pub location: ParameterLocation,
  pub required: bool,
  pub type_expr: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub style: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub explode: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub deprecated: bool,
  #[serde(skip)]
  pub schema: Option<SchemaNode>,
}

impl Parameter {
  fn new(spec: ParameterSpec, synthesizer: &TypeSynthesizer<'_>) -> Self {
    Self {
      identifier: escape_identifier(&spec.name),
      required: spec.required || spec.location == ParameterLocation::Path,
      type_expr: synthesizer.type_of(spec.schema.as_ref(), None),
      name: spec.name,
      location: spec.location,
      style: spec.style,
      explode: spec.explode,
      description: spec.description,
      deprecated: spec.deprecated,
      schema: spec.schema,
    }
  }

  /// Expression reading this parameter from a `params` object.
  #[must_use]
  pub fn accessor(&self) -> String {
    if self.identifier.starts_with('\'') {
      format!("params[{}]", self.identifier)
    } else {
      format!("params.{}", self.identifier)
    }
  }
}

/// A media type with its schema and rendered type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
  pub media_type: String,
  pub type_expr: String,
  #[serde(skip)]
  pub schema: Option<SchemaNode>,
}

impl Content {
  fn new(media_type: &str, spec: &MediaTypeSpec, synthesizer: &TypeSynthesizer<'_>) -> Self {
    Self {
      media_type: media_type.to_string(),
      type_expr: synthesizer.type_of(spec.schema.as_ref(), None),
      schema: spec.schema.clone(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub required: bool,
  pub content: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
  pub status_code: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub content: Vec<Content>,
}

impl Response {
  /// Whether the status code is in `[200, 300)`. Only the leading digits are considered.
  #[must_use]
  pub fn is_success(&self) -> bool {
    let digits = self
      .status_code
      .trim()
      .chars()
      .take_while(char::is_ascii_digit)
      .collect::<String>();
    digits.parse::<u16>().is_ok_and(|status| (200..300).contains(&status))
  }
}

/// One security scheme required by an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
  /// Key of the scheme in `components.securitySchemes`.
  pub key: String,
  /// Header, query or cookie name carrying the credential.
  pub name: String,
  pub identifier: String,
  #[serde(rename = "in")]
  pub location: String,
  pub scopes: Vec<String>,
  pub type_expr: String,
  #[serde(skip)]
  pub schema: Option<SchemaNode>,
}

/// Everything needed to build one operation, as found by the registry.
#[derive(Debug, Clone)]
pub struct OperationEntry<'a> {
  pub id: String,
  pub method: Method,
  pub path: String,
  pub spec: &'a OperationSpec,
  pub path_item: &'a PathItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  pub id: String,
  #[serde(serialize_with = "serialize_method")]
  pub method: Method,
  pub path: String,
  pub tags: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub deprecated: bool,
  pub method_name: String,
  /// Name of the constant holding the path template.
  pub path_var: String,
  /// Path template with `{name}` placeholders replaced by parameter accessors.
  pub path_expression: String,
  pub parameters: Vec<Parameter>,
  pub parameters_required: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub request_body: Option<RequestBody>,
  pub responses: Vec<Response>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub success_status: Option<String>,
  /// Alternative security requirements; each inner list must be satisfied together.
  pub security: Vec<Vec<Security>>,
  pub variants: Vec<OperationVariant>,
}

fn serialize_method<S: Serializer>(method: &Method, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(&method.as_str().to_ascii_lowercase())
}

impl Operation {
  pub fn build(entry: OperationEntry<'_>, context: &mut BuildContext<'_>) -> Result<Self, GenerationError> {
    let options = context.options();
    let synthesizer = context.synthesizer();
    let spec = entry.spec;

    let tags = if spec.tags.is_empty() {
      context.warn(GenerationWarning::MissingTags {
        path: entry.path.clone(),
        method: entry.method.as_str().to_ascii_lowercase(),
        default_tag: options.default_tag.clone(),
      });
      vec![options.default_tag.clone()]
    } else {
      spec.tags.clone()
    };

    let parameters = collect_parameters(&entry, context, &synthesizer)?;
    let security = collect_security(spec, context, &synthesizer)?;

    let request_body = spec
      .request_body
      .as_ref()
      .map(|body| build_request_body(body, context, &synthesizer))
      .transpose()?;

    let mut responses = Vec::with_capacity(spec.responses.len());
    for (status_code, response) in &spec.responses {
      let response = response.resolve(&context.resolver())?;
      responses.push(Response {
        status_code: status_code.clone(),
        description: response.description,
        content: response
          .content
          .iter()
          .map(|(media_type, media)| Content::new(media_type, media, &synthesizer))
          .collect(),
      });
    }
    let success_response = responses.iter().find(|response| response.is_success());

    let method_name = spec.operation_name.clone().unwrap_or_else(|| entry.id.clone());
    let variants =
      VariantCalculator::new(options).calculate(&method_name, request_body.as_ref(), success_response);
    let success_status = success_response.map(|response| response.status_code.clone());

    let parameters_required = parameters.iter().any(|p| p.required)
      || request_body.as_ref().is_some_and(|body| body.required);

    Ok(Self {
      path_var: format!("{}Path", upper_first(&entry.id)),
      path_expression: path_expression(&entry.path, &parameters),
      id: entry.id,
      method: entry.method,
      path: entry.path,
      tags,
      summary: spec.summary.clone(),
      description: spec.description.clone(),
      deprecated: spec.deprecated,
      method_name,
      parameters,
      parameters_required,
      request_body,
      responses,
      success_status,
      security,
      variants,
    })
  }

  #[must_use]
  pub fn success_response(&self) -> Option<&Response> {
    let status = self.success_status.as_deref()?;
    self.responses.iter().find(|response| response.status_code == status)
  }

  #[must_use]
  pub fn has_parameters(&self) -> bool {
    !self.parameters.is_empty() || self.request_body.is_some()
  }
}

/// Path-level parameters followed by operation-level ones, with references resolved.
fn collect_parameters(
  entry: &OperationEntry<'_>,
  context: &mut BuildContext<'_>,
  synthesizer: &TypeSynthesizer<'_>,
) -> Result<Vec<Parameter>, GenerationError> {
  let options = context.options();
  let resolver = context.resolver();
  let mut parameters = vec![];

  for parameter in entry.path_item.parameters.iter().chain(&entry.spec.parameters) {
    let spec = parameter.resolve(&resolver)?;
    if spec.location == ParameterLocation::Cookie {
      context.warn(GenerationWarning::CookieParameterIgnored {
        operation_id: entry.id.clone(),
        parameter: spec.name,
      });
      continue;
    }
    if options.is_parameter_excluded(&spec.name) {
      continue;
    }
    parameters.push(Parameter::new(spec, synthesizer));
  }

  Ok(parameters)
}

/// Operation-level requirements, or the document-level ones when the operation declares none.
fn collect_security(
  spec: &OperationSpec,
  context: &BuildContext<'_>,
  synthesizer: &TypeSynthesizer<'_>,
) -> Result<Vec<Vec<Security>>, GenerationError> {
  let requirements = spec
    .security
    .as_ref()
    .or(context.description().document().security.as_ref());
  let Some(requirements) = requirements else {
    return Ok(vec![]);
  };

  requirements
    .iter()
    .map(|requirement| build_security_group(requirement, context, synthesizer))
    .collect()
}

fn build_security_group(
  requirement: &SecurityRequirement,
  context: &BuildContext<'_>,
  synthesizer: &TypeSynthesizer<'_>,
) -> Result<Vec<Security>, GenerationError> {
  let resolver = context.resolver();
  requirement
    .iter()
    .map(|(key, scopes)| {
      let scheme: SecuritySchemeSpec = resolver.resolve_as(&format!("{SECURITY_SCHEME_REF_PREFIX}{key}"))?;
      Ok(Security {
        key: key.clone(),
        identifier: method_name(key),
        name: scheme.name.unwrap_or_default(),
        location: scheme.location.unwrap_or_else(|| "header".to_string()),
        scopes: scopes.clone(),
        type_expr: synthesizer.type_of(scheme.schema.as_ref(), None),
        schema: scheme.schema,
      })
    })
    .collect()
}

fn build_request_body(
  body: &RefOr<RequestBodySpec>,
  context: &BuildContext<'_>,
  synthesizer: &TypeSynthesizer<'_>,
) -> Result<RequestBody, GenerationError> {
  let body = body.resolve(&context.resolver())?;
  Ok(RequestBody {
    description: body.description,
    required: body.required,
    content: body
      .content
      .iter()
      .map(|(media_type, media)| Content::new(media_type, media, synthesizer))
      .collect(),
  })
}

fn path_expression(path: &str, parameters: &[Parameter]) -> String {
  PATH_PARAM_RE
    .replace_all(path, |caps: &Captures<'_>| {
      let name = &caps[1];
      let accessor = parameters
        .iter()
        .find(|p| p.location == ParameterLocation::Path && p.name == name)
        .map_or_else(|| format!("params.{name}"), Parameter::accessor);
      format!("${{{accessor}}}")
    })
    .into_owned()
}
