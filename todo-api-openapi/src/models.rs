//! The subset of the OpenAPI 3.0 object model the document builder emits.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use schemars::schema::Schema;
use serde::Serialize;

pub const OPENAPI_VERSION: &str = "3.0.3";

pub const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(Debug, Clone, Serialize)]
pub struct OpenApi {
  pub openapi: String,
  pub info: Info,
  pub paths: IndexMap<String, PathItem>,
  #[serde(skip_serializing_if = "Components::is_empty")]
  pub components: Components,
}

#[derive(Debug, Clone, Serialize)]
pub struct Info {
  pub title: String,
  pub version: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PathItem {
  #[serde(flatten)]
  pub operations: IndexMap<OperationType, Operation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
  Get,
  Put,
  Post,
  Delete,
  Options,
  Head,
  Patch,
  Trace,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub tags: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub operation_id: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub parameters: Vec<Parameter>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub request_body: Option<RequestBody>,
  pub responses: BTreeMap<String, Response>,
}

impl Operation {
  pub fn new(summary: impl Into<String>) -> Self {
    Self {
      summary: Some(summary.into()),
      ..Default::default()
    }
  }

  pub fn tag(mut self, tag: impl Into<String>) -> Self {
    self.tags.push(tag.into());
    self
  }

  pub fn operation_id(mut self, id: impl Into<String>) -> Self {
    self.operation_id = Some(id.into());
    self
  }

  pub fn parameter(mut self, parameter: Parameter) -> Self {
    self.parameters.push(parameter);
    self
  }

  pub fn json_body(mut self, schema: Schema) -> Self {
    self.request_body = Some(RequestBody {
      content: json_content(schema),
      required: true,
    });
    self
  }

  /// A response without a body.
  pub fn response(mut self, status: u16, description: impl Into<String>) -> Self {
    self.responses.insert(
      status.to_string(),
      Response {
        description: description.into(),
        content: BTreeMap::new(),
      },
    );
    self
  }

  pub fn json_response(mut self, status: u16, description: impl Into<String>, schema: Schema) -> Self {
    self.responses.insert(
      status.to_string(),
      Response {
        description: description.into(),
        content: json_content(schema),
      },
    );
    self
  }
}

fn json_content(schema: Schema) -> BTreeMap<String, MediaType> {
  BTreeMap::from([(JSON_MEDIA_TYPE.to_owned(), MediaType { schema })])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
  Path,
  Query,
  Header,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: ParameterLocation,
  pub required: bool,
  pub schema: Schema,
}

impl Parameter {
  pub fn path(name: impl Into<String>, schema: Schema) -> Self {
    Self {
      name: name.into(),
      location: ParameterLocation::Path,
      required: true,
      schema,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestBody {
  pub content: BTreeMap<String, MediaType>,
  pub required: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaType {
  pub schema: Schema,
}

#[derive(Debug, Clone, Serialize)]
pub struct Response {
  pub description: String,
  #[serde(skip_serializing_if = "BTreeMap::is_empty")]
  pub content: BTreeMap<String, MediaType>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Components {
  pub schemas: BTreeMap<String, Schema>,
}

impl Components {
  pub fn is_empty(&self) -> bool {
    self.schemas.is_empty()
  }
}
