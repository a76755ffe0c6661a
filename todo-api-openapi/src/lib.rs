mod builder;
mod definition_holder;
mod models;
#[cfg(feature = "axum")]
mod serve;

pub use builder::DocumentBuilder;
pub use definition_holder::DefinitionHolder;
pub use models::*;
#[cfg(feature = "axum")]
pub use serve::document_route;

pub use schemars;
pub use schemars::gen::SchemaGenerator;
