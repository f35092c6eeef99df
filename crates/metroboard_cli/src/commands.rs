//! Typed command grammar for the terminal front end.
//!
//! # Responsibility
//! - Map one input line onto one shell action.
//!
//! # Invariants
//! - Field text keeps inner whitespace; only the line's outer whitespace is
//!   dropped.
//! - A field command without text clears that field.

use metroboard_core::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?P<verb>[A-Za-z?+\-]+)(?:\s+(?P<arg>.*?))?\s*$")
        .expect("valid command regex")
});

/// One parsed user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(usize),
    Edit(Field, String),
    Add,
    Delete,
    UpdateBoard,
    List,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Unknown(String),
    MissingIndex,
    InvalidIndex(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(line) => write!(f, "unknown command `{line}`; type `help`"),
            Self::MissingIndex => write!(f, "select needs an entry number"),
            Self::InvalidIndex(value) => write!(f, "`{value}` is not an entry number"),
        }
    }
}

impl Error for ParseError {}

pub const HELP_TEXT: &str = "\
commands:
  select <n>        show entry n in the form
  id <text>         type into the ID field (no text clears it)
  name <text>       type into the Name field
  message <text>    type into the Message field
  add | +           add a record from the form
  delete | -        delete the selected record
  update            Update Board
  list              redraw the form
  help              show this text
  quit              close the window";

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    if line.trim().is_empty() {
        return Ok(Command::Empty);
    }
    let Some(captures) = COMMAND_RE.captures(line) else {
        return Err(ParseError::Unknown(line.trim().to_string()));
    };
    let verb = captures["verb"].to_ascii_lowercase();
    let arg = captures.name("arg").map_or("", |arg| arg.as_str());

    if let Some(field) = Field::parse(&verb) {
        return Ok(Command::Edit(field, arg.to_string()));
    }

    match verb.as_str() {
        "select" | "s" => {
            if arg.is_empty() {
                return Err(ParseError::MissingIndex);
            }
            arg.parse::<usize>()
                .map(Command::Select)
                .map_err(|_| ParseError::InvalidIndex(arg.to_string()))
        }
        "add" | "+" => Ok(Command::Add),
        "delete" | "del" | "-" => Ok(Command::Delete),
        "update" => Ok(Command::UpdateBoard),
        "list" | "ls" => Ok(Command::List),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(ParseError::Unknown(line.trim().to_string())),
    }
}
