//! Expansion of an operation into one callable variant per request/response content pairing.

use indexmap::IndexMap;
use mediatype::MediaType;
use serde::Serialize;
use strum::Display;

use crate::generator::{
  GeneratorOptions,
  naming::type_name,
  operation::{Content, RequestBody, Response},
  type_synth::VOID_TYPE,
};

const RESPONSE_METHOD_SUFFIX: &str = "$Response";
const ANY_ACCEPT: &str = "*/*";

/// Coarse classification of a media type, used to name variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentBucket {
  Json,
  Text,
  Any,
  /// Any other media type, keyed by its structured suffix, subtype, or (for `type/*`) type.
  Other(String),
}

impl ContentBucket {
  #[must_use]
  pub fn from_media_type(media_type: &str) -> Self {
    let normalized = media_type.trim().to_ascii_lowercase();
    if normalized == "*" || normalized == "*/*" {
      return Self::Any;
    }

    let Ok(media) = MediaType::parse(&normalized) else {
      return Self::from_raw(&normalized);
    };

    let suffix = media.suffix.as_ref().map(mediatype::Name::as_str);
    match (media.ty.as_str(), media.subty.as_str(), suffix) {
      ("application", "octet-stream", _) => Self::Any,
      (_, "json", _) | (_, _, Some("json")) => Self::Json,
      ("text", _, _) => Self::Text,
      (ty, "*", _) => Self::Other(ty.to_string()),
      (_, _, Some(suffix)) => Self::Other(suffix.to_string()),
      (_, subty, None) => Self::Other(subty.to_string()),
    }
  }

  fn from_raw(media_type: &str) -> Self {
    let essence = media_type.split(';').next().unwrap_or(media_type).trim();
    let (ty, subty) = essence.split_once('/').unwrap_or((essence, ""));
    let key = match subty.rsplit_once('+') {
      Some((_, suffix)) => suffix,
      None if subty.is_empty() || subty == "*" => ty,
      None => subty,
    };
    match key {
      "json" => Self::Json,
      _ if ty == "text" => Self::Text,
      _ => Self::Other(key.to_string()),
    }
  }

  /// Fragment appended to the base method name when an axis has more than one bucket.
  #[must_use]
  pub fn method_part(&self, skip_json_suffix: bool) -> String {
    match self {
      Self::Json if skip_json_suffix => String::new(),
      Self::Json => "$Json".to_string(),
      Self::Text => "$Text".to_string(),
      Self::Any => "$Any".to_string(),
      Self::Other(key) => format!("${}", type_name(key)),
    }
  }
}

/// How a variant's response body is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResponseShape {
  Json,
  Text,
  Binary,
}

impl ResponseShape {
  #[must_use]
  pub fn infer(media_type: &str) -> Self {
    let essence = media_type.split(';').next().unwrap_or(media_type).trim().to_ascii_lowercase();
    if essence.ends_with("/json") || essence.ends_with("+json") {
      Self::Json
    } else if essence.starts_with("text/") {
      Self::Text
    } else {
      Self::Binary
    }
  }
}

/// One callable flavor of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationVariant {
  pub method_name: String,
  /// Name of the flavor that exposes the whole HTTP response instead of the body.
  pub response_method_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub request_content: Option<Content>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub success_content: Option<Content>,
  pub result_type: String,
  pub response_shape: ResponseShape,
  pub accept: String,
  pub is_void: bool,
  pub is_number: bool,
  pub is_boolean: bool,
  pub is_other: bool,
}

impl OperationVariant {
  fn new(method_name: String, request_content: Option<Content>, success_content: Option<Content>) -> Self {
    let (result_type, response_shape, accept) = match &success_content {
      Some(content) => (
        content.type_expr.clone(),
        ResponseShape::infer(&content.media_type),
        content.media_type.clone(),
      ),
      None => (VOID_TYPE.to_string(), ResponseShape::Text, ANY_ACCEPT.to_string()),
    };

    let is_void = result_type == VOID_TYPE;
    let is_number = result_type == "number";
    let is_boolean = result_type == "boolean";

    Self {
      response_method_name: format!("{method_name}{RESPONSE_METHOD_SUFFIX}"),
      method_name,
      request_content,
      success_content,
      result_type,
      response_shape,
      accept,
      is_void,
      is_number,
      is_boolean,
      is_other: !is_void && !is_number && !is_boolean,
    }
  }
}

/// Computes the variants of an operation as the cartesian product of request and success
/// response content buckets.
#[derive(Debug, Clone, Copy)]
pub struct VariantCalculator<'o> {
  options: &'o GeneratorOptions,
}

impl<'o> VariantCalculator<'o> {
  #[must_use]
  pub fn new(options: &'o GeneratorOptions) -> Self {
    Self { options }
  }

  #[must_use]
  pub fn calculate(
    &self,
    base_method_name: &str,
    request_body: Option<&RequestBody>,
    success_response: Option<&Response>,
  ) -> Vec<OperationVariant> {
    let request_buckets = self.buckets(request_body.map(|body| body.content.as_slice()));
    let response_buckets = self.buckets(success_response.map(|response| response.content.as_slice()));

    let mut variants = Vec::with_capacity(request_buckets.len() * response_buckets.len());
    for (request_part, request_content) in &request_buckets {
      for (response_part, success_content) in &response_buckets {
        variants.push(OperationVariant::new(
          format!("{base_method_name}{request_part}{response_part}"),
          request_content.clone(),
          success_content.clone(),
        ));
      }
    }
    variants
  }

  /// Groups contents by method-name fragment. A later content in the same bucket replaces the
  /// earlier one but keeps its position. An axis with zero or one bucket contributes no fragment.
  fn buckets(&self, contents: Option<&[Content]>) -> IndexMap<String, Option<Content>> {
    let mut buckets = IndexMap::new();
    for content in contents.unwrap_or_default() {
      let part = ContentBucket::from_media_type(&content.media_type).method_part(self.options.skip_json_suffix);
      buckets.insert(part, Some(content.clone()));
    }

    match buckets.len() {
      0 => IndexMap::from([(String::new(), None)]),
      1 => buckets
        .into_values()
        .map(|content| (String::new(), content))
        .collect(),
      _ => buckets,
    }
  }
}
