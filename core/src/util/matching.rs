/// Filtering an optional value against a predicate.
pub trait Matching<T> {
  /// Returns the wrapped value if one is present and `predicate` holds for it, `None` otherwise.
  ///
  /// `predicate` is evaluated at most once, and only if a value is present. Absence is a normal
  /// return value here, never a failure.
  fn matching<P: FnOnce(&T) -> bool>(self, predicate: P) -> Option<T>;
}

impl<T> Matching<T> for Option<T> {
  #[inline]
  fn matching<P: FnOnce(&T) -> bool>(self, predicate: P) -> Option<T> {
    match self {
      Some(value) if predicate(&value) => Some(value),
      _ => None,
    }
  }
}
