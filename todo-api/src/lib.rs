pub use todo_api_core::*;

#[cfg(feature = "openapi")]
pub use todo_api_openapi as openapi;

pub mod prelude {
  pub use todo_api_core::{
    store::TodoStore, BoxedController, BoxedModule, Controller, Entity, Module, TodoError,
    TodoItem, TodoResult,
  };

  #[cfg(feature = "axum")]
  pub use todo_api_core::router::IntoRouter;
  #[cfg(feature = "openapi")]
  pub use todo_api_openapi::{DefinitionHolder, DocumentBuilder, Operation, OperationType};
}
