use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::flag::Flag;

/// Narrative role of a location. Selects how `look` describes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationStyle {
    /// Nothing to point out beyond the exits.
    #[default]
    Generic,
    /// Lists what is on the surfaces and reminds the player what to pack.
    Kitchen,
    /// Lists what is on the surfaces, or reports an empty room.
    Bedroom,
}

/// A labeled, directed edge to another location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// The token the player types after `go`.
    pub label: String,
    /// Name of the location this exit leads to.
    pub destination: String,
}

/// The closed set of things a use-action can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseEffect {
    /// Unlock the front door (sets [`Flag::DoorOpen`]).
    OpenDoor,
}

/// An effect bound to applying `item` to `target` inside one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseAction {
    /// Inventory item being applied.
    pub item: String,
    /// Fixture it is applied to.
    pub target: String,
    /// What happens.
    pub effect: UseEffect,
}

/// A named place in the world graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique key; also what exits refer to.
    pub name: String,
    /// Text shown on arrival.
    #[serde(default)]
    pub description: String,
    /// How `look` narrates this place.
    #[serde(default)]
    pub style: LocationStyle,
    /// Outgoing exits in display order.
    #[serde(default)]
    pub exits: Vec<Exit>,
    /// Object name to the surface it lies on.
    #[serde(default)]
    pub placements: HashMap<String, String>,
    /// Use-actions available here.
    #[serde(default)]
    pub use_actions: Vec<UseAction>,
    /// Flag that must be set before the player may enter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<Flag>,
}

impl Location {
    /// Create a generic location with no exits or objects.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            style: LocationStyle::Generic,
            exits: Vec::new(),
            placements: HashMap::new(),
            use_actions: Vec::new(),
            gate: None,
        }
    }

    /// Set the narrative style.
    pub fn with_style(mut self, style: LocationStyle) -> Self {
        self.style = style;
        self
    }

    /// Append an exit.
    pub fn with_exit(mut self, label: impl Into<String>, destination: impl Into<String>) -> Self {
        self.exits.push(Exit {
            label: label.into(),
            destination: destination.into(),
        });
        self
    }

    /// Place an object on a surface.
    pub fn with_placement(mut self, object: impl Into<String>, surface: impl Into<String>) -> Self {
        self.placements.insert(object.into(), surface.into());
        self
    }

    /// Register a use-action.
    pub fn with_use_action(
        mut self,
        item: impl Into<String>,
        target: impl Into<String>,
        effect: UseEffect,
    ) -> Self {
        self.use_actions.push(UseAction {
            item: item.into(),
            target: target.into(),
            effect,
        });
        self
    }

    /// Require a flag to enter.
    pub fn with_gate(mut self, flag: Flag) -> Self {
        self.gate = Some(flag);
        self
    }

    /// Find an exit by its label.
    pub fn exit(&self, label: &str) -> Option<&Exit> {
        self.exits.iter().find(|e| e.label == label)
    }

    /// Exit labels in display order.
    pub fn exit_labels(&self) -> impl Iterator<Item = &str> {
        self.exits.iter().map(|e| e.label.as_str())
    }

    /// Check whether an object is placed here.
    pub fn has_placement(&self, object: &str) -> bool {
        self.placements.contains_key(object)
    }

    /// Remove an object, returning the surface it was on.
    pub fn remove_placement(&mut self, object: &str) -> Option<String> {
        self.placements.remove(object)
    }

    /// Look up the effect bound to applying `item` to `target`.
    pub fn use_effect(&self, item: &str, target: &str) -> Option<UseEffect> {
        self.use_actions
            .iter()
            .find(|a| a.item == item && a.target == target)
            .map(|a| a.effect)
    }
}
