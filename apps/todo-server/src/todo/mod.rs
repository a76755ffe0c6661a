mod controller;
mod dto;
mod services;

pub use controller::{TodoItemsController, BASE_PATH};
pub use dto::UpdateTodoItemDto;
pub use services::TodoItemService;

use axum::Router;
use todo_api::prelude::*;

use crate::app::AppState;

pub struct TodoItemsModule;

impl Module for TodoItemsModule {
  type Output = Router<AppState>;

  fn controllers(&self) -> Vec<BoxedController<Self::Output>> {
    vec![Box::new(TodoItemsController)]
  }
}
