//! Command interpretation and world-state engine for utro.
//!
//! A [`Game`] owns one world, one player, and the global flags. Raw input goes
//! through [`parse_command`] into a [`Command`], one of five verb handlers
//! checks its preconditions and applies at most one change, and the narrator
//! turns the result into text. Every refusal is a [`GameError`] whose display
//! is the narration shown to the player.

/// Session configuration.
pub mod config;
/// Use-action effect dispatch.
pub mod effect;
/// Error types for the engine.
pub mod error;
/// Narration text composition.
pub mod narrator;
/// Command parsing.
pub mod parser;
/// The game session and its verb handlers.
pub mod session;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use parser::{Command, Verb, parse_command};
pub use session::Game;
