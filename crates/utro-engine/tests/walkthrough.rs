//! End-to-end play through the morning world.

use proptest::prelude::*;
use utro_core::{Flag, Location};
use utro_engine::{Game, Verb};

/// Everything a command could change.
#[derive(Debug, PartialEq)]
struct State {
    location: String,
    locations: Vec<Location>,
    backpack: bool,
    inventory: Vec<(String, u32)>,
    door_open: bool,
}

fn snapshot(game: &Game) -> State {
    State {
        location: game.current().name.clone(),
        locations: game.world().locations().cloned().collect(),
        backpack: game.player().has_backpack(),
        inventory: game
            .player()
            .items()
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect(),
        door_open: game.flags().is_set(Flag::DoorOpen),
    }
}

#[test]
fn morning_routine() {
    let mut game = Game::morning().unwrap();

    let steps = [
        (
            "осмотреться",
            "ты находишься на кухне, на столе: чай, надо собрать рюкзак и идти в универ. можно пройти - коридор",
        ),
        (
            "идти коридор",
            "ничего интересного. можно пройти - кухня, комната, улица",
        ),
        ("идти улица", "дверь закрыта"),
        ("идти комната", "ты в своей комнате. можно пройти - коридор"),
        (
            "осмотреться",
            "на столе: ключи, конспекты, на стуле: рюкзак. можно пройти - коридор",
        ),
        ("взять ключи", "некуда класть"),
        ("надеть рюкзак", "вы надели: рюкзак"),
        ("надеть рюкзак", "нет такого"),
        (
            "осмотреться",
            "на столе: ключи, конспекты. можно пройти - коридор",
        ),
        ("взять ключи", "предмет добавлен в инвентарь: ключи"),
        ("взять ключи", "нет такого"),
        ("взять конспекты", "предмет добавлен в инвентарь: конспекты"),
        ("осмотреться", "пустая комната. можно пройти - коридор"),
        ("применить ключи дверь", "не к чему применить"),
        ("применить телефон шкаф", "нет предмета в инвентаре - телефон"),
        (
            "идти коридор",
            "ничего интересного. можно пройти - кухня, комната, улица",
        ),
        ("применить ключи шкаф", "не к чему применить"),
        ("применить ключи дверь", "дверь открыта"),
        ("применить ключи дверь", "дверь уже открыта"),
        ("идти кухня", "кухня, ничего интересного. можно пройти - коридор"),
        (
            "осмотреться",
            "ты находишься на кухне, на столе: чай, надо идти в универ. можно пройти - коридор",
        ),
        (
            "идти коридор",
            "ничего интересного. можно пройти - кухня, комната, улица",
        ),
        ("идти улица", "на улице весна. можно пройти - домой"),
        ("осмотреться", "ничего интересного. можно пройти - домой"),
        ("идти коридор", "нет пути в коридор"),
        (
            "идти домой",
            "ничего интересного. можно пройти - кухня, комната, улица",
        ),
    ];

    for (input, expected) in steps {
        assert_eq!(game.process(input), expected, "after `{input}`");
    }

    assert_eq!(game.current().name, "коридор");
    assert_eq!(game.player().count("ключи"), 1);
    assert_eq!(game.player().count("конспекты"), 1);
    assert!(game.flags().is_set(Flag::DoorOpen));
}

#[test]
fn door_stays_open_after_leaving() {
    let mut game = Game::morning().unwrap();
    for input in [
        "идти коридор",
        "идти комната",
        "надеть рюкзак",
        "взять ключи",
        "идти коридор",
        "применить ключи дверь",
        "идти улица",
        "идти домой",
    ] {
        game.process(input);
    }
    assert_eq!(game.process("идти улица"), "на улице весна. можно пройти - домой");
}

proptest! {
    #[test]
    fn unrecognized_first_token_changes_nothing(
        verb in "[a-zа-я]{1,12}",
        rest in proptest::collection::vec("[a-zа-я]{1,8}", 0..3),
    ) {
        prop_assume!(Verb::parse(&verb).is_none());

        let mut game = Game::morning().unwrap();
        game.process("идти коридор");
        game.process("идти комната");
        game.process("надеть рюкзак");
        let before = snapshot(&game);

        let input = std::iter::once(verb).chain(rest).collect::<Vec<_>>().join(" ");
        prop_assert_eq!(game.process(&input), "неизвестная команда");
        prop_assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn going_nowhere_never_moves(label in "[а-я]{1,10}") {
        let mut game = Game::morning().unwrap();
        game.process("идти коридор");
        prop_assume!(game.current().exit(&label).is_none());

        let before = snapshot(&game);
        prop_assert_eq!(game.process(&format!("идти {label}")), format!("нет пути в {label}"));
        prop_assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn take_without_backpack_always_refused(item in "[а-я]{1,10}") {
        let mut game = Game::morning().unwrap();
        game.process("идти коридор");
        game.process("идти комната");

        let before = snapshot(&game);
        prop_assert_eq!(game.process(&format!("взять {item}")), "некуда класть");
        prop_assert_eq!(snapshot(&game), before);
    }
}
