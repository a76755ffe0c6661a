use axum::{
  extract::State,
  http::{header, StatusCode},
  response::IntoResponse,
  routing::get,
  Json, Router,
};
use todo_api::{
  openapi::{Operation, OperationType, Parameter, SchemaGenerator},
  prelude::*,
};
use tower_http::trace::TraceLayer;

use super::{dto::UpdateTodoItemDto, services::TodoItemService};
use crate::{
  app::AppState,
  error::ApiError,
  extract::{self, Path},
};

pub const BASE_PATH: &str = "/api/todoitems";

const TAG: &str = "TodoItems";

pub struct TodoItemsController;

impl Controller for TodoItemsController {
  type Output = Router<AppState>;

  fn path(&self) -> &str {
    BASE_PATH
  }

  fn configure(&self) -> Self::Output {
    Router::new()
      .route("/", get(get_all).post(create))
      .route(
        "/:id",
        get(get_one).put(replace).patch(update).delete(delete),
      )
      .layer(TraceLayer::new_for_http())
  }
}

async fn get_all(State(service): State<TodoItemService>) -> Result<Json<Vec<TodoItem>>, ApiError> {
  service.get_all().await.map(Json)
}

async fn get_one(
  State(service): State<TodoItemService>,
  Path(id): Path<i64>,
) -> Result<Json<TodoItem>, ApiError> {
  service.get_one(id).await.map(Json)
}

async fn create(
  State(service): State<TodoItemService>,
  extract::Json(item): extract::Json<TodoItem>,
) -> Result<impl IntoResponse, ApiError> {
  let created = service.create(item).await?;
  let location = format!("{BASE_PATH}/{}", created.id);

  Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

async fn replace(
  State(service): State<TodoItemService>,
  Path(id): Path<i64>,
  extract::Json(item): extract::Json<TodoItem>,
) -> Result<StatusCode, ApiError> {
  service.replace(id, item).await?;

  Ok(StatusCode::NO_CONTENT)
}

async fn update(
  State(service): State<TodoItemService>,
  Path(id): Path<i64>,
  extract::Json(dto): extract::Json<UpdateTodoItemDto>,
) -> Result<Json<TodoItem>, ApiError> {
  service.update(id, dto).await.map(Json)
}

async fn delete(
  State(service): State<TodoItemService>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  service.delete(id).await?;

  Ok(StatusCode::NO_CONTENT)
}

impl DefinitionHolder for TodoItemsController {
  fn path(&self) -> &str {
    BASE_PATH
  }

  fn operations(&self, generator: &mut SchemaGenerator) -> Vec<(String, OperationType, Operation)> {
    let item = generator.subschema_for::<TodoItem>();
    let items = generator.subschema_for::<Vec<TodoItem>>();
    let patch = generator.subschema_for::<UpdateTodoItemDto>();
    let id = Parameter::path("id", generator.subschema_for::<i64>());

    vec![
      (
        "/".into(),
        OperationType::Get,
        Operation::new("List todo items")
          .tag(TAG)
          .json_response(200, "All todo items ordered by id", items),
      ),
      (
        "/".into(),
        OperationType::Post,
        Operation::new("Create a todo item")
          .tag(TAG)
          .json_body(item.clone())
          .json_response(201, "Created", item.clone())
          .response(409, "An item with this id already exists"),
      ),
      (
        "/:id".into(),
        OperationType::Get,
        Operation::new("Get a todo item")
          .tag(TAG)
          .parameter(id.clone())
          .json_response(200, "The todo item", item.clone())
          .response(404, "No item with this id"),
      ),
      (
        "/:id".into(),
        OperationType::Put,
        Operation::new("Replace a todo item")
          .tag(TAG)
          .parameter(id.clone())
          .json_body(item.clone())
          .response(204, "Replaced")
          .response(400, "Body id does not match the route id")
          .response(404, "No item with this id"),
      ),
      (
        "/:id".into(),
        OperationType::Patch,
        Operation::new("Update fields of a todo item")
          .tag(TAG)
          .parameter(id.clone())
          .json_body(patch)
          .json_response(200, "The updated todo item", item)
          .response(404, "No item with this id"),
      ),
      (
        "/:id".into(),
        OperationType::Delete,
        Operation::new("Delete a todo item")
          .tag(TAG)
          .parameter(id)
          .response(204, "Deleted")
          .response(404, "No item with this id"),
      ),
    ]
  }
}
