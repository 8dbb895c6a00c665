//! Narration text composition.

mod placements;
mod templates;

pub use placements::describe_placements;
pub use templates::{describe_arrival, describe_location, list_exits};
