//! Location descriptions for `look` and `go`.

use utro_core::{Location, LocationStyle, Player, World};

use super::placements::describe_placements;

/// Exit labels in display order, comma separated.
pub fn list_exits(location: &Location) -> String {
    location.exit_labels().collect::<Vec<_>>().join(", ")
}

/// What the player sees after `look`, depending on the location's style.
pub fn describe_location(location: &Location, world: &World, player: &Player) -> String {
    let exits = list_exits(location);
    match location.style {
        LocationStyle::Kitchen => {
            let suffix = if player.has_backpack() {
                "надо идти в универ."
            } else {
                "надо собрать рюкзак и идти в универ."
            };
            let placements = describe_placements(location, world);
            if placements.is_empty() {
                format!("ты находишься на кухне, {suffix} можно пройти - {exits}")
            } else {
                format!("ты находишься на кухне, {placements}, {suffix} можно пройти - {exits}")
            }
        }
        LocationStyle::Bedroom => {
            if location.placements.is_empty() {
                format!("пустая комната. можно пройти - {exits}")
            } else {
                let placements = describe_placements(location, world);
                format!("{placements}. можно пройти - {exits}")
            }
        }
        LocationStyle::Generic => format!("ничего интересного. можно пройти - {exits}"),
    }
}

/// What the player sees on entering a location.
pub fn describe_arrival(location: &Location) -> String {
    format!(
        "{}. можно пройти - {}",
        location.description,
        list_exits(location)
    )
}
