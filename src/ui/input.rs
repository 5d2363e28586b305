//! Line commands typed by the user, standing in for button clicks.

use thiserror::Error;

use crate::ui::cart::ProductId;

pub const HELP: &str = "Commands: add <id> | remove <id> | state | help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add(ProductId),
    Remove(ProductId),
    /// Print the current state as JSON.
    State,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' needs a product id")]
    MissingId { command: &'static str },
    #[error("'{0}' is not a product id")]
    InvalidId(String),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(CommandError::Empty);
    };

    match verb.to_ascii_lowercase().as_str() {
        "add" => parse_id(words.next(), "add").map(Command::Add),
        "remove" | "rm" => parse_id(words.next(), "remove").map(Command::Remove),
        "state" => Ok(Command::State),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_id(word: Option<&str>, command: &'static str) -> Result<ProductId, CommandError> {
    let word = word.ok_or(CommandError::MissingId { command })?;
    word.parse::<u64>()
        .map(ProductId)
        .map_err(|_| CommandError::InvalidId(word.to_string()))
}
