use tracing::info;

use optext_core::util::slot::{AnySlot, Slot};

#[derive(Default, Clone, Copy, Eq, PartialEq, Debug)]
pub enum Status {
  #[default]
  Todo,
  Done,
}

/// Minimal stand-in for a list cell with a polymorphic accessory slot.
#[derive(Default)]
pub struct Cell {
  pub accessory: Slot,
}

#[derive(Default)]
pub struct StatusView {
  pub status: Status,
}

/// Binds an item's status to the cell, reusing an existing `StatusView` in the accessory slot or
/// replacing whatever else the slot held.
pub fn bind_status(cell: &mut Cell, status: Status) {
  let view = cell.accessory.get_or_insert_as(StatusView::default);
  view.status = status;
}

pub fn accessory_scenario() {
  let mut cell = Cell::default();
  bind_status(&mut cell, Status::Todo);
  bind_status(&mut cell, Status::Done);
  if let Some(view) = cell.accessory.get_as::<StatusView>() {
    info!(status = ?view.status, "cell accessory bound");
  }
}
