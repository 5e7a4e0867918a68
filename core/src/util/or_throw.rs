/// Converting an absent optional value into an error.
pub trait OrThrow<T> {
  /// Returns the wrapped value if one is present, `Err(error())` otherwise.
  ///
  /// `error` runs only on the absent path, so constructing an expensive error value costs nothing
  /// when a value is present. The error type is fully caller-chosen; this library never constructs
  /// errors of its own.
  fn or_throw<E, F: FnOnce() -> E>(self, error: F) -> Result<T, E>;
}

impl<T> OrThrow<T> for Option<T> {
  #[inline]
  fn or_throw<E, F: FnOnce() -> E>(self, error: F) -> Result<T, E> {
    match self {
      Some(value) => Ok(value),
      None => Err(error()),
    }
  }
}
