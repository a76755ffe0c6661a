use axum::{routing, Json};

use crate::OpenApi;

/// A `GET` route answering with the given document.
pub fn document_route<S>(document: OpenApi) -> routing::MethodRouter<S>
where
  S: Clone + Send + Sync + 'static,
{
  routing::get(move || {
    let document = document.clone();
    async move { Json(document) }
  })
}
