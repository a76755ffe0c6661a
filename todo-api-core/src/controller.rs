/// A set of routes mounted under a single path.
pub trait Controller {
  type Output;

  fn path(&self) -> &str;
  fn configure(&self) -> Self::Output;
}
