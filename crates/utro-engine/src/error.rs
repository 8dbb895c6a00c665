//! Error types for the engine.

use thiserror::Error;
use utro_core::Flag;

/// Result type for verb handlers.
pub type GameResult<T> = Result<T, GameError>;

/// Reasons a command was refused. The display text is shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Empty input, unknown verb, or too few arguments.
    #[error("неизвестная команда")]
    UnknownCommand,

    /// No exit with this label from the current location.
    #[error("нет пути в {0}")]
    NoPath(String),

    /// The destination requires a flag that is not set.
    #[error("{}", gate_refusal(.0))]
    Gated(Flag),

    /// The item is not here, or cannot be used this way.
    #[error("нет такого")]
    NothingLikeThat,

    /// Taking items requires the backpack.
    #[error("некуда класть")]
    NowhereToPut,

    /// The item is not in the inventory.
    #[error("нет предмета в инвентаре - {0}")]
    NotInInventory(String),

    /// No use-action for this item and target here.
    #[error("не к чему применить")]
    NothingToApply,
}

fn gate_refusal(flag: &Flag) -> &'static str {
    match flag {
        Flag::DoorOpen => "дверь закрыта",
    }
}
