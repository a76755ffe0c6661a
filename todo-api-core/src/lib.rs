mod controller;
mod entity;
mod error;
mod module;
pub mod store;

pub use controller::Controller;
pub use entity::{Entity, TodoItem};
pub use error::{TodoError, TodoResult};
pub use module::{resolve_controllers, Module};

#[cfg(feature = "axum")]
pub mod router;

pub type BoxedModule<Out> = Box<dyn Module<Output = Out>>;

pub type BoxedController<Out> = Box<dyn Controller<Output = Out>>;
