//! Command-line player for utro.

mod play;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use utro_core::{World, seed};
use utro_engine::{Game, GameConfig};

#[derive(Parser)]
#[command(
    name = "utro",
    about = "utro — a morning before university, as a text adventure",
    version
)]
struct Args {
    /// World seed file (JSON). Defaults to the built-in morning world
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// Start in this location instead of the world's own start
    #[arg(long)]
    start: Option<String>,

    /// Run this command and print its narration (repeatable); exits afterwards
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,

    /// Log engine activity at debug level to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = load_game(args.world.as_deref(), args.start.as_deref()).and_then(|game| {
        if args.commands.is_empty() {
            play::interactive(game)
        } else {
            play::scripted(game, &args.commands)
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the game from a seed file, or from the built-in world.
fn load_game(path: Option<&Path>, start: Option<&str>) -> Result<Game, String> {
    let world = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            World::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => World::from_seed(seed::morning()).map_err(|e| e.to_string())?,
    };
    tracing::info!(world = ?path, "world loaded");

    let config = match start {
        Some(name) => GameConfig::new().with_start_location(name),
        None => GameConfig::new(),
    };
    Game::new(world, &config).map_err(|e| e.to_string())
}
