use pokegrid_core::{Coord, Coord2};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Save(Option<PathBuf>),
    Load(PathBuf),
    Restart,
    NewGame,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Nothing entered")]
    Empty,
    #[error("Unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("Expected: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a valid row or column")]
    BadCoord(String),
}

pub const HELP: &str = "\
r ROW COL     reveal a cell
f ROW COL     place or remove a pokeball
save [FILE]   save the game (reuses the last file if none given)
load FILE     load a saved game
restart       same pokemon, fresh board
new           new pokemon locations
help          this text
quit          leave the game";

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(ParseError::Empty);
        };
        let rest: Vec<&str> = words.collect();

        match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => parse_coords(&rest, "r ROW COL").map(Self::Reveal),
            "f" | "flag" => parse_coords(&rest, "f ROW COL").map(Self::Flag),
            "save" => match rest.as_slice() {
                [] => Ok(Self::Save(None)),
                [path] => Ok(Self::Save(Some(PathBuf::from(path)))),
                _ => Err(ParseError::Usage("save [FILE]")),
            },
            "load" => match rest.as_slice() {
                [path] => Ok(Self::Load(PathBuf::from(path))),
                _ => Err(ParseError::Usage("load FILE")),
            },
            "restart" => Ok(Self::Restart),
            "new" => Ok(Self::NewGame),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(ParseError::Unknown(other.to_owned())),
        }
    }
}

fn parse_coords(args: &[&str], usage: &'static str) -> Result<Coord2, ParseError> {
    // accept "2 3" as well as "2,3"
    let joined = args.join(" ");
    let parts: Vec<&str> = joined
        .split([',', ' '])
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => Ok((parse_coord(row)?, parse_coord(col)?)),
        _ => Err(ParseError::Usage(usage)),
    }
}

fn parse_coord(word: &str) -> Result<Coord, ParseError> {
    word.parse()
        .map_err(|_| ParseError::BadCoord(word.to_owned()))
}
