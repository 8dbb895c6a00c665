/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when building a world from a seed.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// Two locations share the same name.
    #[error("location already exists: \"{0}\"")]
    DuplicateLocation(String),

    /// An exit points at a location that is not part of the seed.
    #[error("exit \"{label}\" from \"{from}\" leads to unknown location \"{to}\"")]
    UnknownDestination {
        /// The location the exit belongs to.
        from: String,
        /// The exit label.
        label: String,
        /// The unresolved destination name.
        to: String,
    },

    /// The starting location is not part of the seed.
    #[error("unknown location: \"{0}\"")]
    UnknownLocation(String),

    /// The seed could not be parsed.
    #[error("invalid world seed: {0}")]
    Json(#[from] serde_json::Error),
}
