//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Location to start in instead of the world's own start.
    pub start_location: Option<String>,
}

impl GameConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in a specific location.
    pub fn with_start_location(mut self, name: impl Into<String>) -> Self {
        self.start_location = Some(name.into());
        self
    }
}
