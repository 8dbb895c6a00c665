use std::collections::BTreeMap;

use utro_core::{Location, World};

/// Describe what lies where, grouped by surface.
///
/// Surfaces are sorted by name and objects are sorted within each surface,
/// so the text never depends on placement order:
/// `на столе: ключи, конспекты, на стуле: рюкзак`.
/// Returns an empty string when nothing is placed.
pub fn describe_placements(location: &Location, world: &World) -> String {
    let mut by_surface: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (object, surface) in &location.placements {
        by_surface
            .entry(surface.as_str())
            .or_default()
            .push(object.as_str());
    }

    by_surface
        .into_iter()
        .map(|(surface, mut objects)| {
            objects.sort_unstable();
            format!("на {}: {}", world.surface_form(surface), objects.join(", "))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
