//! Feed player input to a game and print the narration.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use utro_engine::Game;

/// Word that ends an interactive session.
const QUIT: &str = "выход";

/// Run each command in order, printing one line of narration per command.
pub fn scripted(mut game: Game, commands: &[String]) -> Result<(), String> {
    let mut out = io::stdout().lock();
    for command in commands {
        writeln!(out, "{}", game.process(command)).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Read commands from stdin until EOF or the quit word.
pub fn interactive(mut game: Game) -> Result<(), String> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(
        out,
        "{} {}",
        "utro".bold(),
        format!("(«{QUIT}» чтобы закончить)").dimmed()
    )
    .map_err(|e| e.to_string())?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "{} ", ">".bold()).map_err(|e| e.to_string())?;
        out.flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            writeln!(out).map_err(|e| e.to_string())?;
            break;
        };
        let line = line.map_err(|e| e.to_string())?;
        if line.trim() == QUIT {
            break;
        }

        writeln!(out, "{}", game.process(&line)).map_err(|e| e.to_string())?;
    }

    Ok(())
}
