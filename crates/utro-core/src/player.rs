use std::collections::HashMap;

/// What the player is carrying.
///
/// Items can only be stowed once the backpack is worn; counts never drop to
/// zero while an entry exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    backpack: bool,
    inventory: HashMap<String, u32>,
}

impl Player {
    /// A player with no backpack and an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the backpack is being worn.
    pub fn has_backpack(&self) -> bool {
        self.backpack
    }

    /// Put the backpack on.
    pub fn wear_backpack(&mut self) {
        self.backpack = true;
    }

    /// How many of `item` the player carries.
    pub fn count(&self, item: &str) -> u32 {
        self.inventory.get(item).copied().unwrap_or(0)
    }

    /// Add one `item` to the inventory.
    ///
    /// Returns `false` and leaves the inventory untouched if there is no
    /// backpack to put it in.
    pub fn stow(&mut self, item: impl Into<String>) -> bool {
        if !self.backpack {
            return false;
        }
        *self.inventory.entry(item.into()).or_insert(0) += 1;
        true
    }

    /// Carried items with their counts, sorted by name.
    pub fn items(&self) -> Vec<(&str, u32)> {
        let mut items: Vec<_> = self
            .inventory
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        items.sort_unstable();
        items
    }
}
