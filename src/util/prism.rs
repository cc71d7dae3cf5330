
//! Functional-style prisms for checked downcasts.

/// A prism from `Up` to `Down` is an assertion of a subtype
/// relationship between `Up` and `Down`. Specifically, it asserts
/// that every `Down` can be seen as an `Up` in a well-defined way,
/// and that some `Up`s can be safely downcast to type `Down`.
///
/// Prisms implementing this trait should satisfy the following laws.
///
/// * A widen followed by a narrow should reproduce the original
/// value. That is, for all `d: Down`,
/// `prism.narrow_type(prism.widen_type(d)) === Ok(d)`.
///
/// * A successful narrow, followed by a widen, should reproduce the
/// original value completely.
///
/// * A failed narrow shall return the original value. That is, for
/// all `u: Up`, if `prism.narrow_type(u) = Err(u1)`, then `u === u1`.
pub trait Prism<Up, Down> {
  /// Attempts to downcast `input` to the type `Down`. This method
  /// shall either return the result of successfully downcasting (as
  /// an `Ok`) or the original input value (as an `Err`).
  fn narrow_type(&self, input: Up) -> Result<Down, Up>;

  /// Widens a `Down` value to its parent type. This must always
  /// succeed.
  fn widen_type(&self, input: Down) -> Up;
}

/// Prism which accepts vectors of exactly length `N`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VecToArray<const N: usize>;

impl<const N: usize> VecToArray<N> {
  pub fn new() -> Self {
    VecToArray
  }
}

impl<T, const N: usize> Prism<Vec<T>, [T; N]> for VecToArray<N> {
  fn narrow_type(&self, input: Vec<T>) -> Result<[T; N], Vec<T>> {
    input.try_into()
  }

  fn widen_type(&self, input: [T; N]) -> Vec<T> {
    input.into()
  }
}
