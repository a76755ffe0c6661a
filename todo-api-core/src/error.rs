use thiserror::Error;

pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
  #[error("todo item {0} not found")]
  NotFound(i64),

  #[error("todo item {0} already exists")]
  Conflict(i64),

  #[error("storage error: {0}")]
  Storage(String),
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for TodoError {
  fn from(err: rusqlite::Error) -> Self {
    TodoError::Storage(err.to_string())
  }
}
