use crate::{BoxedController, BoxedModule};

/// A group of controllers. Modules can import other modules, which is how
/// an application is assembled from feature modules.
pub trait Module {
  type Output;

  fn imports(&self) -> Vec<BoxedModule<Self::Output>> {
    vec![]
  }

  fn controllers(&self) -> Vec<BoxedController<Self::Output>> {
    vec![]
  }
}

/// Flattens a module tree into its controllers.
///
/// A module's own controllers come before those of its imports, and imports
/// are walked depth-first in declaration order.
pub fn resolve_controllers<Out>(module: &dyn Module<Output = Out>) -> Vec<BoxedController<Out>> {
  let mut controllers = vec![];
  collect_controllers(module, &mut controllers);

  controllers
}

fn collect_controllers<Out>(
  module: &dyn Module<Output = Out>,
  controllers: &mut Vec<BoxedController<Out>>,
) {
  controllers.extend(module.controllers());

  for imported in module.imports() {
    collect_controllers(&*imported, controllers);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Controller;

  struct Named(&'static str);

  impl Controller for Named {
    type Output = String;

    fn path(&self) -> &str {
      self.0
    }

    fn configure(&self) -> String {
      format!("configured {}", self.0)
    }
  }

  struct Leaf;

  impl Module for Leaf {
    type Output = String;

    fn controllers(&self) -> Vec<BoxedController<String>> {
      vec![Box::new(Named("/leaf"))]
    }
  }

  struct Middle;

  impl Module for Middle {
    type Output = String;

    fn imports(&self) -> Vec<BoxedModule<String>> {
      vec![Box::new(Leaf)]
    }

    fn controllers(&self) -> Vec<BoxedController<String>> {
      vec![Box::new(Named("/middle"))]
    }
  }

  struct Root;

  impl Module for Root {
    type Output = String;

    fn imports(&self) -> Vec<BoxedModule<String>> {
      vec![Box::new(Middle), Box::new(Leaf)]
    }

    fn controllers(&self) -> Vec<BoxedController<String>> {
      vec![Box::new(Named("/")), Box::new(Named("/health"))]
    }
  }

  struct Empty;

  impl Module for Empty {
    type Output = String;
  }

  #[test]
  fn own_controllers_come_before_imports() {
    let paths: Vec<String> = resolve_controllers(&Root)
      .iter()
      .map(|c| c.path().to_owned())
      .collect();

    assert_eq!(paths, ["/", "/health", "/middle", "/leaf", "/leaf"]);
  }

  #[test]
  fn resolved_controllers_configure_their_output() {
    let outputs: Vec<String> = resolve_controllers(&Middle)
      .iter()
      .map(|c| c.configure())
      .collect();

    assert_eq!(outputs, ["configured /middle", "configured /leaf"]);
  }

  #[test]
  fn empty_module_resolves_to_nothing() {
    assert!(resolve_controllers(&Empty).is_empty());
  }
}
