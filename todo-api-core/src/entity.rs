use serde::{Deserialize, Serialize};

/// Storage identity of a record type.
///
/// Stores build their schema and lookups from these declarations, so the
/// key column is always named explicitly.
pub trait Entity {
  type Key;

  const TABLE: &'static str;
  const PRIMARY_KEY: &'static str;

  fn key(&self) -> Self::Key;
}

/// One to-do record.
///
/// On the wire the fields are camelCase (`id`, `name`, `isComplete`) and any
/// of them may be omitted. An `id` of `0` means "not assigned yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct TodoItem {
  pub id: i64,
  pub name: Option<String>,
  #[serde(alias = "is_complete")]
  pub is_complete: bool,
}

impl TodoItem {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
      ..Default::default()
    }
  }
}

impl Entity for TodoItem {
  type Key = i64;

  const TABLE: &'static str = "todo_items";
  const PRIMARY_KEY: &'static str = "id";

  fn key(&self) -> i64 {
    self.id
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn round_trips_through_json() {
    let item = TodoItem {
      id: 1,
      name: Some("buy milk".into()),
      is_complete: false,
    };

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(
      value,
      json!({ "id": 1, "name": "buy milk", "isComplete": false })
    );

    let back: TodoItem = serde_json::from_value(value).unwrap();
    assert_eq!(back, item);
  }

  #[test]
  fn absent_name_is_kept_as_null() {
    let item = TodoItem {
      id: 7,
      name: None,
      is_complete: true,
    };

    let text = serde_json::to_string(&item).unwrap();
    assert_eq!(text, r#"{"id":7,"name":null,"isComplete":true}"#);

    let back: TodoItem = serde_json::from_str(&text).unwrap();
    assert_eq!(back.name, None);
    assert_eq!(back, item);
  }

  #[test]
  fn missing_fields_fall_back_to_defaults() {
    let item: TodoItem = serde_json::from_str(r#"{"name":"walk dog"}"#).unwrap();

    assert_eq!(item.id, 0);
    assert_eq!(item.name.as_deref(), Some("walk dog"));
    assert!(!item.is_complete);

    let empty: TodoItem = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, TodoItem::default());
  }

  #[test]
  fn accepts_snake_case_completion_flag() {
    let item: TodoItem = serde_json::from_str(r#"{"id":3,"is_complete":true}"#).unwrap();

    assert!(item.is_complete);
  }

  #[test]
  fn completion_toggles_independently() {
    let mut item = TodoItem::new("water plants");
    item.id = 4;
    assert!(!item.is_complete);

    item.is_complete = true;

    assert_eq!(item.id, 4);
    assert_eq!(item.name.as_deref(), Some("water plants"));
    assert!(item.is_complete);
  }

  #[test]
  fn equality_compares_every_field() {
    let a = TodoItem {
      id: 1,
      name: Some("a".into()),
      is_complete: false,
    };
    let renamed = TodoItem {
      name: Some("b".into()),
      ..a.clone()
    };
    let completed = TodoItem {
      is_complete: true,
      ..a.clone()
    };

    assert_ne!(a, renamed);
    assert_ne!(a, completed);
    assert_eq!(a, a.clone());
  }

  #[test]
  fn primary_key_is_declared() {
    let item = TodoItem {
      id: 42,
      ..Default::default()
    };

    assert_eq!(TodoItem::TABLE, "todo_items");
    assert_eq!(TodoItem::PRIMARY_KEY, "id");
    assert_eq!(item.key(), 42);
  }
}
