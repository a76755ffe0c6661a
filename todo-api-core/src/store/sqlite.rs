use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use tokio::sync::Mutex;

use super::TodoStore;
use crate::{Entity, TodoError, TodoItem, TodoResult};

/// SQLite-backed store.
///
/// The table and its key column come from [`Entity`]; the key is declared
/// `AUTOINCREMENT` so deleted ids are never handed out again.
#[derive(Clone)]
pub struct SqliteStore {
  conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
  pub fn open(path: impl AsRef<Path>) -> TodoResult<Self> {
    Self::with_connection(Connection::open(path)?)
  }

  pub fn open_in_memory() -> TodoResult<Self> {
    Self::with_connection(Connection::open_in_memory()?)
  }

  fn with_connection(conn: Connection) -> TodoResult<Self> {
    create_table(&conn)?;

    Ok(Self {
      conn: Arc::new(Mutex::new(conn)),
    })
  }
}

fn create_table(conn: &Connection) -> TodoResult<()> {
  conn.execute(
    &format!(
      "CREATE TABLE IF NOT EXISTS {table} (
        {key} INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        is_complete INTEGER NOT NULL DEFAULT 0
      )",
      table = TodoItem::TABLE,
      key = TodoItem::PRIMARY_KEY,
    ),
    [],
  )?;

  Ok(())
}

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<TodoItem> {
  Ok(TodoItem {
    id: row.get(0)?,
    name: row.get(1)?,
    is_complete: row.get(2)?,
  })
}

fn select_sql() -> String {
  format!(
    "SELECT {key}, name, is_complete FROM {table}",
    key = TodoItem::PRIMARY_KEY,
    table = TodoItem::TABLE,
  )
}

fn fetch(conn: &Connection, id: i64) -> TodoResult<TodoItem> {
  conn
    .query_row(
      &format!("{} WHERE {} = ?1", select_sql(), TodoItem::PRIMARY_KEY),
      params![id],
      row_to_item,
    )
    .optional()?
    .ok_or(TodoError::NotFound(id))
}

fn insert(conn: &Connection, item: &TodoItem) -> rusqlite::Result<usize> {
  if item.id == 0 {
    conn.execute(
      &format!(
        "INSERT INTO {} (name, is_complete) VALUES (?1, ?2)",
        TodoItem::TABLE
      ),
      params![item.name, item.is_complete],
    )
  } else {
    conn.execute(
      &format!(
        "INSERT INTO {} ({}, name, is_complete) VALUES (?1, ?2, ?3)",
        TodoItem::TABLE,
        TodoItem::PRIMARY_KEY
      ),
      params![item.id, item.name, item.is_complete],
    )
  }
}

#[async_trait]
impl TodoStore for SqliteStore {
  async fn list(&self) -> TodoResult<Vec<TodoItem>> {
    let conn = self.conn.lock().await;
    let mut stmt = conn.prepare(&format!(
      "{} ORDER BY {}",
      select_sql(),
      TodoItem::PRIMARY_KEY
    ))?;
    let items = stmt
      .query_map([], row_to_item)?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(items)
  }

  async fn get(&self, id: i64) -> TodoResult<TodoItem> {
    let conn = self.conn.lock().await;
    fetch(&conn, id)
  }

  async fn create(&self, mut item: TodoItem) -> TodoResult<TodoItem> {
    let conn = self.conn.lock().await;

    match insert(&conn, &item) {
      Ok(_) => {}
      Err(rusqlite::Error::SqliteFailure(err, _)) if err.code == ErrorCode::ConstraintViolation => {
        return Err(TodoError::Conflict(item.id));
      }
      Err(err) => return Err(err.into()),
    }

    item.id = conn.last_insert_rowid();
    tracing::trace!(id = item.id, "inserted todo item row");

    Ok(item)
  }

  async fn update(&self, item: TodoItem) -> TodoResult<TodoItem> {
    let conn = self.conn.lock().await;
    let changed = conn.execute(
      &format!(
        "UPDATE {} SET name = ?1, is_complete = ?2 WHERE {} = ?3",
        TodoItem::TABLE,
        TodoItem::PRIMARY_KEY
      ),
      params![item.name, item.is_complete, item.id],
    )?;

    if changed == 0 {
      return Err(TodoError::NotFound(item.id));
    }

    Ok(item)
  }

  async fn delete(&self, id: i64) -> TodoResult<TodoItem> {
    let conn = self.conn.lock().await;
    let item = fetch(&conn, id)?;

    conn.execute(
      &format!(
        "DELETE FROM {} WHERE {} = ?1",
        TodoItem::TABLE,
        TodoItem::PRIMARY_KEY
      ),
      params![id],
    )?;

    Ok(item)
  }
}
