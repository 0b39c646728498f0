use std::str::FromStr;

use sweeper_core::{Coord, Coord2, GameError, MarkKind};
use thiserror::Error;

pub const HELP: &str = "\
Commands (coordinates are ROW COL, starting at 0):
  r ROW COL        reveal a cell (also: reveal, t, trigger)
  f ROW COL        flag a cell
  q ROW COL        put a question mark on a cell
  m ROW COL KIND   mark a cell, KIND is 1 (flag) or 2 (question)
  u ROW COL        remove a flag or question mark
  h                show this help
  x                quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Mark(Coord2, MarkKind),
    Unmark(Coord2),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty input")]
    Empty,
    #[error("Unknown command {0:?}")]
    UnknownCommand(String),
    #[error("Missing {0}")]
    MissingArgument(&'static str),
    #[error("Invalid {what} {value:?}")]
    InvalidNumber { what: &'static str, value: String },
    #[error("Unexpected input {0:?}")]
    TrailingInput(String),
    #[error(transparent)]
    MarkKind(#[from] GameError),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let verb = tokens.next().ok_or(ParseError::Empty)?.to_ascii_lowercase();

        let command = match verb.as_str() {
            "r" | "reveal" | "t" | "trigger" => Self::Reveal(parse_coords(&mut tokens)?),
            "f" | "flag" => Self::Mark(parse_coords(&mut tokens)?, MarkKind::Flag),
            "q" | "question" => Self::Mark(parse_coords(&mut tokens)?, MarkKind::Question),
            "m" | "mark" => {
                let coords = parse_coords(&mut tokens)?;
                let kind = tokens
                    .next()
                    .ok_or(ParseError::MissingArgument("mark kind"))?
                    .parse()?;
                Self::Mark(coords, kind)
            }
            "u" | "unmark" => Self::Unmark(parse_coords(&mut tokens)?),
            "h" | "help" | "?" => Self::Help,
            "x" | "quit" | "exit" => Self::Quit,
            _ => return Err(ParseError::UnknownCommand(verb)),
        };

        match tokens.next() {
            Some(extra) => Err(ParseError::TrailingInput(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, ParseError> {
    Ok((
        parse_axis(tokens.next(), "row")?,
        parse_axis(tokens.next(), "column")?,
    ))
}

fn parse_axis(token: Option<&str>, what: &'static str) -> Result<Coord, ParseError> {
    let token = token.ok_or(ParseError::MissingArgument(what))?;
    token.parse().map_err(|_| ParseError::InvalidNumber {
        what,
        value: token.to_string(),
    })
}
