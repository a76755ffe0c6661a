use schemars::gen::SchemaGenerator;

use crate::{Operation, OperationType};

/// Describes the operations served under one base path.
///
/// Sub-paths are relative to [`DefinitionHolder::path`] and may use axum
/// `:param` segments; the builder rewrites them to OpenAPI `{param}` form.
/// Schemas should be obtained from `generator` so that named types end up
/// in the document's components.
pub trait DefinitionHolder {
  fn path(&self) -> &str;

  fn operations(&self, generator: &mut SchemaGenerator) -> Vec<(String, OperationType, Operation)>;
}
