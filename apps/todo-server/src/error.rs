use axum::{
  extract::rejection::{JsonRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde::Serialize;
use thiserror::Error;
use todo_api::TodoError;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Todo(#[from] TodoError),

  #[error("route id {path} does not match body id {body}")]
  IdMismatch { path: i64, body: i64 },

  /// The request was refused by an extractor before reaching a handler.
  #[error("{message}")]
  Rejected { status: StatusCode, message: String },
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::Rejected {
      status: rejection.status(),
      message: rejection.body_text(),
    }
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    ApiError::Rejected {
      status: rejection.status(),
      message: rejection.body_text(),
    }
  }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
  status: u16,
  error: String,
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Todo(TodoError::NotFound(_)) => StatusCode::NOT_FOUND,
      ApiError::Todo(TodoError::Conflict(_)) => StatusCode::CONFLICT,
      ApiError::Todo(TodoError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
      ApiError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
      ApiError::Rejected { status, .. } => *status,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();

    // storage details stay in the logs
    let error = match &self {
      ApiError::Todo(TodoError::Storage(detail)) => {
        tracing::error!(%detail, "todo store failed");
        "internal server error".to_owned()
      }
      other => other.to_string(),
    };

    let body = ErrorBody {
      status: status.as_u16(),
      error,
    };

    (status, Json(body)).into_response()
  }
}
