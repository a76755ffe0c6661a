use std::sync::Arc;

use axum::extract::FromRef;
use todo_api::{store::TodoStore, TodoItem};

use super::dto::UpdateTodoItemDto;
use crate::{app::AppState, error::ApiError};

#[derive(Clone)]
pub struct TodoItemService {
  store: Arc<dyn TodoStore>,
}

impl FromRef<AppState> for TodoItemService {
  fn from_ref(state: &AppState) -> Self {
    Self {
      store: state.store.clone(),
    }
  }
}

impl TodoItemService {
  pub async fn get_all(&self) -> Result<Vec<TodoItem>, ApiError> {
    Ok(self.store.list().await?)
  }

  pub async fn get_one(&self, id: i64) -> Result<TodoItem, ApiError> {
    Ok(self.store.get(id).await?)
  }

  pub async fn create(&self, item: TodoItem) -> Result<TodoItem, ApiError> {
    let created = self.store.create(item).await?;
    tracing::info!(id = created.id, "created todo item");

    Ok(created)
  }

  /// Replaces every field of an existing item. The body must carry the same
  /// id as the route.
  pub async fn replace(&self, id: i64, item: TodoItem) -> Result<(), ApiError> {
    if item.id != id {
      return Err(ApiError::IdMismatch {
        path: id,
        body: item.id,
      });
    }

    self.store.update(item).await?;
    tracing::info!(id, "replaced todo item");

    Ok(())
  }

  pub async fn update(&self, id: i64, dto: UpdateTodoItemDto) -> Result<TodoItem, ApiError> {
    let mut item = self.store.get(id).await?;

    if let Some(name) = dto.name {
      item.name = Some(name);
    }

    if let Some(is_complete) = dto.is_complete {
      item.is_complete = is_complete;
    }

    let updated = self.store.update(item).await?;
    tracing::info!(id, "updated todo item");

    Ok(updated)
  }

  pub async fn delete(&self, id: i64) -> Result<TodoItem, ApiError> {
    let removed = self.store.delete(id).await?;
    tracing::info!(id, "deleted todo item");

    Ok(removed)
  }
}
