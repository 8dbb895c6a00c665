//! Game session management.

use utro_core::{Flags, Location, LocationId, Player, World, WorldError, WorldResult, seed};

use crate::config::GameConfig;
use crate::effect;
use crate::error::{GameError, GameResult};
use crate::narrator::{describe_arrival, describe_location};
use crate::parser::{Command, parse_command};

/// One player's game: the world, the player, and the global flags.
///
/// Each session owns its own copy of all state; clone a fresh `Game` rather
/// than sharing one between players.
#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    player: Player,
    flags: Flags,
    location: LocationId,
}

impl Game {
    /// Start a game in `world`.
    ///
    /// The player starts in the configured location if one is given, or the
    /// world's own start otherwise.
    pub fn new(world: World, config: &GameConfig) -> WorldResult<Self> {
        let location = match &config.start_location {
            Some(name) => world
                .id(name)
                .ok_or_else(|| WorldError::UnknownLocation(name.clone()))?,
            None => world.start(),
        };

        tracing::info!(start = %world.get(location).name, "game started");

        Ok(Self {
            world,
            player: Player::new(),
            flags: Flags::new(),
            location,
        })
    }

    /// Start a game in the built-in morning world.
    pub fn morning() -> WorldResult<Self> {
        Self::new(World::from_seed(seed::morning())?, &GameConfig::default())
    }

    /// Get the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Get the global flags.
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// The location the player is in.
    pub fn current(&self) -> &Location {
        self.world.get(self.location)
    }

    /// Process a line of player input and return the narration.
    ///
    /// Refusals are narrated too; this never fails.
    pub fn process(&mut self, input: &str) -> String {
        let command = parse_command(input);
        match self.execute(command) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(input, refusal = %e, "command refused");
                e.to_string()
            }
        }
    }

    /// Execute a parsed command.
    ///
    /// On `Err` no state has changed.
    pub fn execute(&mut self, command: Command) -> GameResult<String> {
        tracing::debug!(?command, location = %self.current().name, "executing command");
        match command {
            Command::Look => Ok(self.do_look()),
            Command::Go { destination } => self.do_go(&destination),
            Command::Wear { item } => self.do_wear(&item),
            Command::Take { item } => self.do_take(&item),
            Command::Use { item, target } => self.do_use(&item, &target),
            Command::Unknown { input } => {
                tracing::debug!(%input, "unrecognized input");
                Err(GameError::UnknownCommand)
            }
        }
    }

    fn do_look(&self) -> String {
        describe_location(self.current(), &self.world, &self.player)
    }

    fn do_go(&mut self, label: &str) -> GameResult<String> {
        let destination = self
            .current()
            .exit(label)
            .and_then(|exit| self.world.id(&exit.destination))
            .ok_or_else(|| GameError::NoPath(label.to_string()))?;

        let gate = self.world.get(destination).gate;
        if let Some(flag) = gate.filter(|&flag| !self.flags.is_set(flag)) {
            return Err(GameError::Gated(flag));
        }

        self.location = destination;
        tracing::debug!(to = %self.current().name, "player moved");
        Ok(describe_arrival(self.current()))
    }

    fn do_wear(&mut self, item: &str) -> GameResult<String> {
        if item != self.world.backpack_item() {
            return Err(GameError::NothingLikeThat);
        }

        let here = self.world.get_mut(self.location);
        if here.remove_placement(item).is_none() {
            return Err(GameError::NothingLikeThat);
        }

        self.player.wear_backpack();
        Ok(format!("вы надели: {item}"))
    }

    fn do_take(&mut self, item: &str) -> GameResult<String> {
        if !self.player.has_backpack() {
            return Err(GameError::NowhereToPut);
        }
        if !self.current().has_placement(item) {
            return Err(GameError::NothingLikeThat);
        }

        self.world.get_mut(self.location).remove_placement(item);
        self.player.stow(item);
        Ok(format!("предмет добавлен в инвентарь: {item}"))
    }

    fn do_use(&mut self, item: &str, target: &str) -> GameResult<String> {
        if self.player.count(item) == 0 {
            return Err(GameError::NotInInventory(item.to_string()));
        }

        let effect = self
            .current()
            .use_effect(item, target)
            .ok_or(GameError::NothingToApply)?;

        Ok(effect::apply(effect, &mut self.flags))
    }
}
