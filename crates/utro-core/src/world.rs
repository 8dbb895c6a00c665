use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::location::Location;

/// The serializable description of a world, consumed once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSeed {
    /// Location the player starts in.
    pub start: String,
    /// The one item that can be worn to carry others.
    pub backpack_item: String,
    /// Surface name to the form used after "на" in narration.
    #[serde(default)]
    pub surfaces: HashMap<String, String>,
    /// Every location in the world.
    pub locations: Vec<Location>,
}

/// Handle to a location inside one [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationId(usize);

/// The central world model. Owns every location.
#[derive(Debug, Clone)]
pub struct World {
    locations: Vec<Location>,
    by_name: HashMap<String, LocationId>,
    start: LocationId,
    backpack_item: String,
    surfaces: HashMap<String, String>,
}

impl World {
    /// Build a world from a seed, checking that the start location and
    /// every exit destination exist.
    pub fn from_seed(seed: WorldSeed) -> WorldResult<Self> {
        let mut by_name = HashMap::with_capacity(seed.locations.len());
        for (index, location) in seed.locations.iter().enumerate() {
            if by_name
                .insert(location.name.clone(), LocationId(index))
                .is_some()
            {
                return Err(WorldError::DuplicateLocation(location.name.clone()));
            }
        }

        let start = *by_name
            .get(&seed.start)
            .ok_or_else(|| WorldError::UnknownLocation(seed.start.clone()))?;

        for location in &seed.locations {
            if let Some(exit) = location
                .exits
                .iter()
                .find(|e| !by_name.contains_key(&e.destination))
            {
                return Err(WorldError::UnknownDestination {
                    from: location.name.clone(),
                    label: exit.label.clone(),
                    to: exit.destination.clone(),
                });
            }
        }

        tracing::debug!(
            locations = seed.locations.len(),
            start = %seed.start,
            "world seed validated"
        );

        Ok(Self {
            locations: seed.locations,
            by_name,
            start,
            backpack_item: seed.backpack_item,
            surfaces: seed.surfaces,
        })
    }

    /// Parse a JSON seed and build a world from it.
    pub fn from_json(json: &str) -> WorldResult<Self> {
        let seed: WorldSeed = serde_json::from_str(json)?;
        Self::from_seed(seed)
    }

    /// The starting location.
    pub fn start(&self) -> LocationId {
        self.start
    }

    /// Name of the wearable backpack item.
    pub fn backpack_item(&self) -> &str {
        &self.backpack_item
    }

    /// Form of a surface name used in narration, falling back to the name itself.
    pub fn surface_form<'a>(&'a self, surface: &'a str) -> &'a str {
        self.surfaces
            .get(surface)
            .map(String::as_str)
            .unwrap_or(surface)
    }

    /// Resolve a location name to its handle.
    pub fn id(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    /// Get a location by handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different world.
    pub fn get(&self, id: LocationId) -> &Location {
        &self.locations[id.0]
    }

    /// Get a mutable reference to a location by handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different world.
    pub fn get_mut(&mut self, id: LocationId) -> &mut Location {
        &mut self.locations[id.0]
    }

    /// Get a location by name.
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.id(name).map(|id| self.get(id))
    }

    /// Get a mutable reference to a location by name.
    pub fn location_mut(&mut self, name: &str) -> Option<&mut Location> {
        self.id(name).map(|id| self.get_mut(id))
    }

    /// Iterate over all locations in seed order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }
}
