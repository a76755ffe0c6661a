use ::axum::Router;

use crate::{module::resolve_controllers, Module};

pub trait IntoRouter<S> {
  fn into_router(self) -> Router<S>;
}

impl<T, S> IntoRouter<S> for T
where
  S: Clone + Send + Sync + 'static,
  T: Module<Output = Router<S>>,
{
  fn into_router(self) -> Router<S> {
    resolve_controllers(&self)
      .into_iter()
      .fold(Router::new(), |router, controller| {
        let routes = controller.configure();

        // axum refuses to nest at the root
        match controller.path().trim_end_matches('/') {
          "" => router.merge(routes),
          path => router.nest(path, routes),
        }
      })
  }
}
