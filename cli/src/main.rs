use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use minefield_core::*;

use command::{Command, HELP};

mod command;
mod render;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Preset> for GameConfig {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => GameConfig::beginner(),
            Preset::Intermediate => GameConfig::intermediate(),
            Preset::Expert => GameConfig::expert(),
        }
    }
}

/// Play minesweeper in the terminal, one command per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML file with `size = [w, h]`, `mines` and optional `seed`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start from a standard board instead of the config file
    #[arg(short, long, value_enum, conflicts_with = "config")]
    preset: Option<Preset>,

    #[arg(long)]
    width: Option<Coord>,

    #[arg(long)]
    height: Option<Coord>,

    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match (&self.config, self.preset) {
            (Some(path), _) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Could not read {}", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("Could not parse {}", path.display()))?
            }
            (None, Some(preset)) => preset.into(),
            (None, None) => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.size.0 = width;
        }
        if let Some(height) = self.height {
            config.size.1 = height;
        }
        if let Some(mines) = self.mines {
            config.mines = mines;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        config.validate().context("Invalid game settings")?;
        Ok(config)
    }
}

/// Logs the end of a game and tells whether the board needs redrawing.
fn announce(outcome: RevealOutcome) -> bool {
    if outcome.is_final() {
        log::info!("game over: {:?}", outcome);
    }
    outcome.has_update()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.game_config()?;
    log::debug!("config: {:?}", config);
    let mut game = Game::new(config)?;

    let mut out = io::stdout().lock();
    writeln!(out, "{}", HELP)?;
    render::write_game(&mut out, &game)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };
        log::debug!("command: {:?}", command);

        let result = match command {
            Command::Reveal(coords) => game.on_primary(coords).map(announce),
            Command::Flag(coords) => game.on_secondary(coords).map(|outcome| outcome.has_update()),
            Command::Chord(coords) => game.on_chord(coords).map(announce),
            Command::Restart => {
                game.restart();
                Ok(true)
            }
            Command::Pause if game.is_paused() => {
                game.resume();
                Ok(true)
            }
            Command::Pause => {
                game.pause();
                Ok(true)
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                Ok(false)
            }
            Command::Quit => break,
        };

        match result {
            Ok(true) => render::write_game(&mut out, &game)?,
            Ok(false) => {}
            Err(err) => writeln!(out, "{}", err)?,
        }
    }

    Ok(())
}
