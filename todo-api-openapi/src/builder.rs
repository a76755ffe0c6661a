use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use schemars::gen::{SchemaGenerator, SchemaSettings};

use crate::{
  Components, DefinitionHolder, Info, OpenApi, OperationType, PathItem, OPENAPI_VERSION,
};

/// Collects operations from [`DefinitionHolder`]s into one [`OpenApi`]
/// document. Named schemas referenced by any operation are gathered into
/// `components.schemas`.
pub struct DocumentBuilder {
  info: Info,
  paths: IndexMap<String, PathItem>,
  generator: SchemaGenerator,
}

impl DocumentBuilder {
  pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
    Self {
      info: Info {
        title: title.into(),
        version: version.into(),
      },
      paths: IndexMap::new(),
      generator: SchemaSettings::openapi3().into_generator(),
    }
  }

  pub fn register(mut self, holder: &impl DefinitionHolder) -> Self {
    for (sub_path, operation_type, mut operation) in holder.operations(&mut self.generator) {
      let path = template_path(&join_paths(holder.path(), &sub_path));

      if operation.operation_id.is_none() {
        operation.operation_id = Some(build_operation_id(&path, &operation_type));
      }

      self
        .paths
        .entry(path)
        .or_default()
        .operations
        .insert(operation_type, operation);
    }

    self
  }

  pub fn build(mut self) -> OpenApi {
    OpenApi {
      openapi: OPENAPI_VERSION.to_owned(),
      info: self.info,
      paths: self.paths,
      components: Components {
        schemas: self.generator.take_definitions().into_iter().collect(),
      },
    }
  }
}

fn join_paths(base: &str, sub: &str) -> String {
  let joined = format!(
    "{}/{}",
    base.trim_end_matches('/'),
    sub.trim_start_matches('/')
  );
  let joined = joined.trim_matches('/');

  format!("/{joined}")
}

static PATH_PARAM_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("path parameter regex"));

static PATH_RESOURCE_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"/(.*?)/\{(.*?)\}").expect("path template regex"));

/// Rewrites axum `:param` segments to OpenAPI `{param}` templates.
fn template_path(path: &str) -> String {
  PATH_PARAM_REGEX.replace_all(path, "{${1}}").into_owned()
}

fn build_operation_id(path: &str, operation_type: &OperationType) -> String {
  let resource = PATH_RESOURCE_REGEX
    .captures(path)
    .and_then(|c| c.get(1))
    .map(|m| m.as_str())
    .unwrap_or(path)
    .trim_matches('/');

  format!(
    "{:?}_{}-{:x}",
    operation_type,
    resource.replace('/', "-"),
    md5::compute(path)
  )
  .to_lowercase()
}

#[cfg(test)]
mod tests {
  use assert_json_diff::{assert_json_eq, assert_json_include};
  use schemars::JsonSchema;
  use serde_json::json;

  use super::*;
  use crate::{Operation, Parameter};

  #[allow(dead_code)]
  #[derive(JsonSchema)]
  struct Widget {
    id: i64,
    label: Option<String>,
  }

  struct WidgetController;

  impl DefinitionHolder for WidgetController {
    fn path(&self) -> &str {
      "/widgets"
    }

    fn operations(&self, generator: &mut SchemaGenerator) -> Vec<(String, OperationType, Operation)> {
      vec![
        (
          "/".into(),
          OperationType::Get,
          Operation::new("List widgets")
            .tag("Widgets")
            .json_response(200, "All widgets", generator.subschema_for::<Vec<Widget>>()),
        ),
        (
          "/:id".into(),
          OperationType::Delete,
          Operation::new("Delete a widget")
            .parameter(Parameter::path("id", generator.subschema_for::<i64>()))
            .response(204, "Deleted"),
        ),
        (
          "/:id".into(),
          OperationType::Put,
          Operation::new("Replace a widget")
            .operation_id("replaceWidget")
            .json_body(generator.subschema_for::<Widget>())
            .response(204, "Replaced"),
        ),
      ]
    }
  }

  struct Root;

  impl DefinitionHolder for Root {
    fn path(&self) -> &str {
      "/"
    }

    fn operations(&self, _: &mut SchemaGenerator) -> Vec<(String, OperationType, Operation)> {
      vec![(String::new(), OperationType::Get, Operation::new("Liveness").response(200, "Up"))]
    }
  }

  #[test]
  fn joins_and_templates_paths() {
    assert_eq!(join_paths("/", ""), "/");
    assert_eq!(join_paths("/api/todoitems", ""), "/api/todoitems");
    assert_eq!(join_paths("/api/todoitems/", "/"), "/api/todoitems");
    assert_eq!(join_paths("api", "/:id"), "/api/:id");
    assert_eq!(template_path("/api/todoitems/:id"), "/api/todoitems/{id}");
    assert_eq!(template_path("/a/:first/b/:second_id"), "/a/{first}/b/{second_id}");
  }

  #[test]
  fn operation_ids_name_the_resource() {
    assert_eq!(
      build_operation_id("/api/todoitems", &OperationType::Get),
      "get_api-todoitems-785790a22c8595d1811fc45b11553e93"
    );
    assert_eq!(
      build_operation_id("/api/todoitems/{id}", &OperationType::Patch),
      "patch_api-todoitems-2dfb9e7aea3eb387c137f0b89d04d3e2"
    );
  }

  #[test]
  fn builds_paths_from_holders() {
    let document = DocumentBuilder::new("Widgets", "v1")
      .register(&Root)
      .register(&WidgetController)
      .build();
    let value = serde_json::to_value(&document).unwrap();

    assert_json_eq!(
      value["paths"].clone(),
      json!({
        "/": {
          "get": {
            "summary": "Liveness",
            "operationId": "get_-6666cd76f96956469e7be39d750cc7d9",
            "responses": { "200": { "description": "Up" } }
          }
        },
        "/widgets": {
          "get": {
            "tags": ["Widgets"],
            "summary": "List widgets",
            "operationId": "get_widgets-36e74d1bba56eb40301d92a16d330b05",
            "responses": {
              "200": {
                "description": "All widgets",
                "content": {
                  "application/json": {
                    "schema": {
                      "type": "array",
                      "items": { "$ref": "#/components/schemas/Widget" }
                    }
                  }
                }
              }
            }
          }
        },
        "/widgets/{id}": {
          "delete": {
            "summary": "Delete a widget",
            "operationId": "delete_widgets-87625a97e8c040389be5a2aaa9d12451",
            "parameters": [{
              "name": "id",
              "in": "path",
              "required": true,
              "schema": { "type": "integer", "format": "int64" }
            }],
            "responses": { "204": { "description": "Deleted" } }
          },
          "put": {
            "summary": "Replace a widget",
            "operationId": "replaceWidget",
            "requestBody": {
              "required": true,
              "content": {
                "application/json": {
                  "schema": { "$ref": "#/components/schemas/Widget" }
                }
              }
            },
            "responses": { "204": { "description": "Replaced" } }
          }
        }
      })
    );
  }

  #[test]
  fn collects_component_schemas() {
    let document = DocumentBuilder::new("Widgets", "v1")
      .register(&WidgetController)
      .build();
    let value = serde_json::to_value(&document).unwrap();

    assert_eq!(value["openapi"], "3.0.3");
    assert_json_eq!(value["info"].clone(), json!({ "title": "Widgets", "version": "v1" }));
    assert_json_include!(
      actual: value["components"]["schemas"]["Widget"].clone(),
      expected: json!({
        "type": "object",
        "required": ["id"],
        "properties": {
          "id": { "type": "integer", "format": "int64" },
          "label": { "type": "string", "nullable": true }
        }
      })
    );
  }

  #[test]
  fn omits_empty_components() {
    let value = serde_json::to_value(DocumentBuilder::new("Bare", "v0").register(&Root).build()).unwrap();

    assert!(value.get("components").is_none());
  }
}
