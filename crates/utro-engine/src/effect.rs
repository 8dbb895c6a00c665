//! Effects triggered by use-actions.

use utro_core::{Flag, Flags, UseEffect};

/// Apply an effect to the global flags and return its outcome message.
///
/// Effects never undo themselves: applying one a second time reports that
/// nothing changed.
pub fn apply(effect: UseEffect, flags: &mut Flags) -> String {
    match effect {
        UseEffect::OpenDoor => {
            if flags.set(Flag::DoorOpen) {
                tracing::debug!("door opened");
                "дверь открыта".to_string()
            } else {
                "дверь уже открыта".to_string()
            }
        }
    }
}
