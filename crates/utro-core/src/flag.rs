use serde::{Deserialize, Serialize};

/// A world-level boolean that use-actions can set and gates can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    /// The front door has been unlocked.
    DoorOpen,
}

/// Current values of every [`Flag`]. All flags start unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    door_open: bool,
}

impl Flags {
    /// Create a record with every flag unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a flag is set.
    pub fn is_set(&self, flag: Flag) -> bool {
        match flag {
            Flag::DoorOpen => self.door_open,
        }
    }

    /// Set a flag. Returns `true` if it was previously unset.
    pub fn set(&mut self, flag: Flag) -> bool {
        let slot = match flag {
            Flag::DoorOpen => &mut self.door_open,
        };
        !std::mem::replace(slot, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_start_unset() {
        assert!(!Flags::new().is_set(Flag::DoorOpen));
    }

    #[test]
    fn set_reports_first_change_only() {
        let mut flags = Flags::new();
        assert!(flags.set(Flag::DoorOpen));
        assert!(flags.is_set(Flag::DoorOpen));
        assert!(!flags.set(Flag::DoorOpen));
        assert!(flags.is_set(Flag::DoorOpen));
    }

    #[test]
    fn flag_serializes_snake_case() {
        let json = serde_json::to_string(&Flag::DoorOpen).unwrap();
        assert_eq!(json, "\"door_open\"");
    }
}
