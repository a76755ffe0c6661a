use schemars::JsonSchema;
use serde::Deserialize;

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoItemDto {
  #[serde(default)]
  pub name: Option<String>,

  #[serde(default, alias = "is_complete")]
  pub is_complete: Option<bool>,
}
