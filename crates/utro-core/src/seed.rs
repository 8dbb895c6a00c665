use std::collections::HashMap;

use crate::flag::Flag;
use crate::location::{Location, LocationStyle, UseEffect};
use crate::world::WorldSeed;

/// The morning-before-university world: kitchen, corridor, room, and street.
///
/// The street is locked behind the front door, which the keys from the room
/// open from the corridor. Its "домой" exit leads back to the corridor.
pub fn morning() -> WorldSeed {
    let kitchen = Location::new("кухня", "кухня, ничего интересного")
        .with_style(LocationStyle::Kitchen)
        .with_exit("коридор", "коридор")
        .with_placement("чай", "стол");

    let corridor = Location::new("коридор", "ничего интересного")
        .with_exit("кухня", "кухня")
        .with_exit("комната", "комната")
        .with_exit("улица", "улица")
        .with_use_action("ключи", "дверь", UseEffect::OpenDoor);

    let room = Location::new("комната", "ты в своей комнате")
        .with_style(LocationStyle::Bedroom)
        .with_exit("коридор", "коридор")
        .with_placement("ключи", "стол")
        .with_placement("конспекты", "стол")
        .with_placement("рюкзак", "стул");

    let street = Location::new("улица", "на улице весна")
        .with_exit("домой", "коридор")
        .with_gate(Flag::DoorOpen);

    WorldSeed {
        start: "кухня".to_string(),
        backpack_item: "рюкзак".to_string(),
        surfaces: HashMap::from([
            ("стол".to_string(), "столе".to_string()),
            ("стул".to_string(), "стуле".to_string()),
        ]),
        locations: vec![kitchen, corridor, room, street],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;

    #[test]
    fn morning_seed_is_valid() {
        let world = World::from_seed(morning()).unwrap();
        assert_eq!(world.get(world.start()).name, "кухня");
        assert_eq!(world.locations().count(), 4);
    }

    #[test]
    fn street_is_gated_and_leads_home() {
        let world = World::from_seed(morning()).unwrap();
        let street = world.location("улица").unwrap();
        assert_eq!(street.gate, Some(Flag::DoorOpen));
        assert_eq!(street.exit("домой").unwrap().destination, "коридор");
    }

    #[test]
    fn bundled_json_matches_builtin_seed() {
        let json = include_str!("../../../worlds/morning.json");
        let from_file = World::from_json(json).unwrap();
        let builtin = World::from_seed(morning()).unwrap();

        assert_eq!(from_file.start(), builtin.start());
        assert_eq!(from_file.locations().count(), builtin.locations().count());
        assert_eq!(from_file.backpack_item(), builtin.backpack_item());
        for location in builtin.locations() {
            assert_eq!(from_file.location(&location.name), Some(location));
        }
        assert_eq!(from_file.surface_form("стул"), "стуле");
    }
}
