//! # Remap Module
//!
//! Applies a resolved [`MappingRecord`] to a raw controller snapshot,
//! producing a logically addressed snapshot.
//!
//! ## Semantics
//!
//! - **Buttons**: the 11 logical button slots are rebuilt from an all-false
//!   staging buffer; each mapped slot copies the raw pressed flag at its
//!   source index. The staging buffer makes the copy aliasing-safe: a raw
//!   index can also be a destination slot, and an in-place overwrite would
//!   corrupt later reads in the same pass. Raw positions beyond the logical
//!   range pass through unchanged.
//! - **Axes**: each mapped logical axis slot receives the raw reading at its
//!   source index multiplied by the slot's polarity. Unmapped axis slots keep
//!   the incoming value; unlike buttons they are not reset.
//!
//! Source indices outside the snapshot's capacity are treated as unmapped.
//!
//! ## Usage
//!
//! ```
//! use gamepad_remap::db::{ButtonSlot, MappingRecord};
//! use gamepad_remap::remap::apply;
//! use gamepad_remap::state::ControllerState;
//!
//! let mut record = MappingRecord::new();
//! record.buttons[ButtonSlot::A.index()] = Some(3);
//!
//! let mut raw = ControllerState::new();
//! raw.buttons[3] = true;
//!
//! let logical = apply(&record, &raw);
//! assert!(logical.buttons[ButtonSlot::A.index()]);
//! ```

use crate::db::record::{MappingRecord, BUTTON_SLOT_COUNT};
use crate::state::{ControllerState, MAX_AXES, MAX_BUTTONS};

/// Produces a logically remapped snapshot from a raw one.
///
/// Pure transform: never mutates its inputs, has no side effects, and is
/// safe to call from any thread as long as the inputs are not concurrently
/// mutated.
#[must_use]
pub fn apply(record: &MappingRecord, raw: &ControllerState) -> ControllerState {
    let mut logical = raw.clone();

    // Stage, then commit: source and destination indices can alias.
    let mut staged = [false; BUTTON_SLOT_COUNT];
    for (slot, mapping) in record.buttons.iter().enumerate() {
        if let Some(source) = *mapping {
            if source < MAX_BUTTONS {
                staged[slot] = raw.buttons[source];
            }
        }
    }
    logical.buttons[..BUTTON_SLOT_COUNT].copy_from_slice(&staged);

    for (slot, mapping) in record.axes.iter().enumerate() {
        if let Some(source) = mapping.source {
            if source < MAX_AXES {
                logical.axes[slot] = raw.axes[source] * mapping.sign();
            }
        }
    }

    logical
}
