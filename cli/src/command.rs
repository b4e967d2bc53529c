use std::str::FromStr;

use minefield_core::{Coord, Coord2};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  r X Y   reveal
  f X Y   toggle flag
  c X Y   chord (reveal around a satisfied number)
  n       new game
  p       pause / resume
  h       help
  q       quit";

/// One line of player input, already resolved to a discrete game event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Chord(Coord2),
    Restart,
    Pause,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Unknown command {0:?}, try h for help")]
    Unknown(String),
    #[error("Expected two coordinates after {0:?}")]
    MissingCoords(String),
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(ParseCommandError::Unknown(String::new()));
        };

        match verb {
            "r" | "reveal" => parse_coords(verb, words).map(Command::Reveal),
            "f" | "flag" => parse_coords(verb, words).map(Command::Flag),
            "c" | "chord" => parse_coords(verb, words).map(Command::Chord),
            "n" | "new" => Ok(Command::Restart),
            "p" | "pause" => Ok(Command::Pause),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" => Ok(Command::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_coords<'a>(
    verb: &str,
    mut words: impl Iterator<Item = &'a str>,
) -> Result<Coord2, ParseCommandError> {
    let mut next = || -> Result<Coord, ParseCommandError> {
        let word = words
            .next()
            .ok_or_else(|| ParseCommandError::MissingCoords(verb.to_string()))?;
        word.parse()
            .map_err(|_| ParseCommandError::InvalidCoord(word.to_string()))
    };
    let x = next()?;
    let y = next()?;
    Ok((x, y))
}
