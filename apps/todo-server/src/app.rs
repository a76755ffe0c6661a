use std::sync::Arc;

use axum::{routing::get, Router};
use todo_api::{
  openapi::{document_route, OpenApi, Operation, OperationType, SchemaGenerator},
  prelude::*,
  store::{MemoryStore, SqliteStore},
};

use crate::{
  config::{OpenApiConfig, StorageConfig},
  todo::{TodoItemsController, TodoItemsModule},
};

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn TodoStore>,
}

impl AppState {
  pub fn new(store: impl TodoStore + 'static) -> Self {
    Self {
      store: Arc::new(store),
    }
  }

  pub fn from_config(storage: &StorageConfig) -> TodoResult<Self> {
    let state = match storage {
      StorageConfig::Memory => Self::new(MemoryStore::new()),
      StorageConfig::Sqlite { path } => Self::new(SqliteStore::open(path)?),
    };

    tracing::info!(?storage, "opened todo store");

    Ok(state)
  }
}

impl Default for AppState {
  fn default() -> Self {
    Self::new(MemoryStore::new())
  }
}

pub struct AppModule;

impl Module for AppModule {
  type Output = Router<AppState>;

  fn imports(&self) -> Vec<BoxedModule<Self::Output>> {
    vec![Box::new(TodoItemsModule)]
  }

  fn controllers(&self) -> Vec<BoxedController<Self::Output>> {
    vec![Box::new(AppController)]
  }
}

pub struct AppController;

impl Controller for AppController {
  type Output = Router<AppState>;

  fn path(&self) -> &str {
    "/"
  }

  fn configure(&self) -> Self::Output {
    Router::new().route("/", get(up))
  }
}

async fn up() -> &'static str {
  "UP!"
}

impl DefinitionHolder for AppController {
  fn path(&self) -> &str {
    "/"
  }

  fn operations(&self, _: &mut SchemaGenerator) -> Vec<(String, OperationType, Operation)> {
    vec![(
      String::new(),
      OperationType::Get,
      Operation::new("Liveness probe").response(200, "The service is up"),
    )]
  }
}

pub fn api_document() -> OpenApi {
  DocumentBuilder::new("TodoApi", "v1")
    .register(&AppController)
    .register(&TodoItemsController)
    .build()
}

/// The complete application router, ready to serve.
pub fn router(state: AppState, openapi: &OpenApiConfig) -> Router {
  let mut router: Router<AppState> = AppModule.into_router();

  if openapi.enabled {
    router = router.route(&openapi.path, document_route(api_document()));
  }

  router.with_state(state)
}
