//! Persistence for todo items.
//!
//! Every store upholds the same contract: ids are unique, generated ids
//! start at 1 and never reuse an id that was handed out or supplied, and
//! listings are ordered by id.

use async_trait::async_trait;

use crate::{TodoItem, TodoResult};

mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

#[async_trait]
pub trait TodoStore: Send + Sync {
  /// All items, ordered by id.
  async fn list(&self) -> TodoResult<Vec<TodoItem>>;

  async fn get(&self, id: i64) -> TodoResult<TodoItem>;

  /// Stores a new item. An id of `0` asks the store to assign one; any other
  /// id is used as given and fails with `Conflict` if it is taken.
  async fn create(&self, item: TodoItem) -> TodoResult<TodoItem>;

  /// Replaces the stored item with the same id.
  async fn update(&self, item: TodoItem) -> TodoResult<TodoItem>;

  /// Removes an item, returning what was stored.
  async fn delete(&self, id: i64) -> TodoResult<TodoItem>;
}
