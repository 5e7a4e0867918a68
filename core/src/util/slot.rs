use std::any::{Any, type_name};

use tracing::debug;

/// A polymorphic slot: caller-owned optional storage for a boxed value of any runtime type.
///
/// Models the "accessory" pattern of UI frameworks, where a container exposes an optional property
/// of an abstract base view type and users stash their own concrete view in it.
pub type Slot = Option<Box<dyn Any>>;

/// Getting or lazily creating a typed value inside a polymorphic slot.
pub trait AnySlot {
  /// Returns a mutable borrow of the slot's value if its runtime type is `T`. Otherwise invokes
  /// `create` exactly once, stores the new value, and returns a borrow of it.
  ///
  /// The store is a lossy overwrite: a previously stored value of a *different* type is dropped
  /// without further notice to the caller. Use [`get_as`](Self::get_as) first when the old value
  /// still matters.
  ///
  /// The slot is mutated at most once, only on the miss path, and only after `create` returns; a
  /// panicking factory leaves the slot unchanged.
  fn get_or_insert_as<T: Any, F: FnOnce() -> T>(&mut self, create: F) -> &mut T;

  /// Returns a borrow of the slot's value if its runtime type is `T`, without ever mutating.
  fn get_as<T: Any>(&self) -> Option<&T>;
}

impl AnySlot for Option<Box<dyn Any>> {
  fn get_or_insert_as<T: Any, F: FnOnce() -> T>(&mut self, create: F) -> &mut T {
    let holds_target = self.as_ref().map_or(false, |existing| existing.is::<T>());
    if !holds_target {
      if self.is_some() {
        debug!(new_type = type_name::<T>(), "replacing slot value of a different type");
      }
      *self = Some(Box::new(create()));
    }
    match self.as_mut().and_then(|value| value.downcast_mut::<T>()) {
      Some(value) => value,
      None => unreachable!("slot holds a value of the requested type"),
    }
  }

  #[inline]
  fn get_as<T: Any>(&self) -> Option<&T> {
    self.as_ref().and_then(|value| value.downcast_ref::<T>())
  }
}
