use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TodoStore;
use crate::{TodoError, TodoItem, TodoResult};

#[derive(Debug)]
struct State {
  items: BTreeMap<i64, TodoItem>,
  /// `None` once `i64::MAX` has been stored.
  next_id: Option<i64>,
}

impl Default for State {
  fn default() -> Self {
    Self {
      items: BTreeMap::new(),
      next_id: Some(1),
    }
  }
}

/// In-process store, lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
  state: RwLock<State>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl TodoStore for MemoryStore {
  async fn list(&self) -> TodoResult<Vec<TodoItem>> {
    Ok(self.state.read().await.items.values().cloned().collect())
  }

  async fn get(&self, id: i64) -> TodoResult<TodoItem> {
    self
      .state
      .read()
      .await
      .items
      .get(&id)
      .cloned()
      .ok_or(TodoError::NotFound(id))
  }

  async fn create(&self, mut item: TodoItem) -> TodoResult<TodoItem> {
    let mut state = self.state.write().await;

    if item.id == 0 {
      item.id = state
        .next_id
        .ok_or_else(|| TodoError::Storage("todo item ids exhausted".into()))?;
    } else if state.items.contains_key(&item.id) {
      return Err(TodoError::Conflict(item.id));
    }

    if state.next_id.is_some_and(|next| item.id >= next) {
      state.next_id = item.id.checked_add(1);
    }

    state.items.insert(item.id, item.clone());
    tracing::trace!(id = item.id, "stored todo item in memory");

    Ok(item)
  }

  async fn update(&self, item: TodoItem) -> TodoResult<TodoItem> {
    let mut state = self.state.write().await;
    let slot = state
      .items
      .get_mut(&item.id)
      .ok_or(TodoError::NotFound(item.id))?;

    *slot = item.clone();

    Ok(item)
  }

  async fn delete(&self, id: i64) -> TodoResult<TodoItem> {
    self
      .state
      .write()
      .await
      .items
      .remove(&id)
      .ok_or(TodoError::NotFound(id))
  }
}
