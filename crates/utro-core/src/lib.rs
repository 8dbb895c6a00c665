//! Core types for utro: locations, the player, global flags, and the world model.
//!
//! This crate owns no game behavior. A [`World`] is built once from a
//! [`WorldSeed`], either in code ([`seed::morning`]) or deserialized from JSON,
//! and validated so that every exit leads somewhere.

/// Error types used while loading a world.
pub mod error;
/// World-level boolean flags.
pub mod flag;
/// Locations, exits, placements, and use-actions.
pub mod location;
/// The player's possessions.
pub mod player;
/// Built-in world seeds.
pub mod seed;
/// The world model and its serializable seed form.
pub mod world;

pub use error::{WorldError, WorldResult};
pub use flag::{Flag, Flags};
pub use location::{Exit, Location, LocationStyle, UseAction, UseEffect};
pub use player::Player;
pub use world::{LocationId, World, WorldSeed};
