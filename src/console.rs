#![cfg(feature = "std")]

//! Interactive terminal shell: reads commands, forwards them to the field
//! and prints the board after every move.

use std::fmt;
use std::io::{BufRead, Write};
use std::string::{String, ToString};

use anyhow::bail;
use log::{debug, info};

use crate::{
    common::{ExploreResult, GameStatus},
    config::DEFAULT_MINES,
    field::Field,
};

pub const MINES_PROMPT: &str = "How many mines do you want on the field? > ";
pub const MOVE_PROMPT: &str = "Set/unset mines marks or claim a cell as free: > ";
pub const WIN_MESSAGE: &str = "Congratulations! You found all the mines!";
pub const LOSS_MESSAGE: &str = "You stepped on a mine and failed!";

/// What the player wants to do with a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `mine`: set or clear a mark.
    Mark,
    /// `free`: claim the cell is safe and open it.
    Explore,
}

/// One parsed line of player input. Coordinates are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub row: usize,
    pub col: usize,
    pub action: Action,
}

/// Reasons a line of input is not a valid command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Expected exactly three tokens.
    WrongArity(usize),
    /// A coordinate is not a non-negative integer.
    InvalidCoordinate(String),
    /// The action is neither `mine` nor `free`.
    UnknownAction(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::WrongArity(n) => {
                write!(f, "expected '<column> <row> <mine|free>', got {} word(s)", n)
            }
            CommandError::InvalidCoordinate(token) => {
                write!(f, "'{}' is not a valid coordinate", token)
            }
            CommandError::UnknownAction(token) => {
                write!(f, "unknown action '{}', use 'mine' or 'free'", token)
            }
        }
    }
}

impl std::error::Error for CommandError {}

fn parse_coordinate(token: &str) -> Result<usize, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::InvalidCoordinate(token.to_string()))
}

impl Command {
    /// Parse `<column> <row> <mine|free>`, column first.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [x, y, action] => {
                let col = parse_coordinate(x)?;
                let row = parse_coordinate(y)?;
                let action = match *action {
                    "mine" => Action::Mark,
                    "free" => Action::Explore,
                    other => return Err(CommandError::UnknownAction(other.to_string())),
                };
                Ok(Command { row, col, action })
            }
            other => Err(CommandError::WrongArity(other.len())),
        }
    }

    /// Forward the command to the field.
    pub fn apply(self, field: &mut Field) {
        match self.action {
            Action::Mark => {
                if !field.toggle_mark(self.row, self.col) {
                    debug!("cannot mark ({}, {})", self.row, self.col);
                }
            }
            Action::Explore => match field.explore(self.row, self.col) {
                ExploreResult::Detonated => info!("mine hit at ({}, {})", self.row, self.col),
                ExploreResult::Cleared(n) => debug!("revealed {} cell(s)", n),
                other => debug!("explore ({}, {}): {:?}", self.row, self.col, other),
            },
        }
    }
}

/// Game shell over any line-based input and text output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hand back the output sink, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `text` and read one trimmed line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for the number of mines until a number is given. An empty line
    /// picks the default.
    pub fn read_mine_count(&mut self) -> anyhow::Result<usize> {
        loop {
            let Some(line) = self.prompt(MINES_PROMPT)? else {
                bail!("input closed before a mine count was given");
            };
            if line.is_empty() {
                return Ok(DEFAULT_MINES);
            }
            match line.parse() {
                Ok(mines) => return Ok(mines),
                Err(_) => writeln!(self.output, "Invalid mine count '{}'", line)?,
            }
        }
    }

    fn show(&mut self, field: &Field) -> anyhow::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", field)?;
        Ok(())
    }

    /// Run the move loop until the game ends or input runs out.
    pub fn play(&mut self, field: &mut Field) -> anyhow::Result<GameStatus> {
        self.show(field)?;
        while !field.is_game_over() {
            let Some(line) = self.prompt(MOVE_PROMPT)? else {
                info!("input closed, leaving the game unfinished");
                return Ok(GameStatus::InProgress);
            };
            if line.is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Ok(command) => {
                    command.apply(field);
                    self.show(field)?;
                }
                Err(e) => writeln!(self.output, "Invalid command: {}", e)?,
            }
        }
        let status = field.status();
        info!(
            "game over with {} cell(s) revealed: {:?}",
            field.revealed_count(),
            status
        );
        if status == GameStatus::Won {
            writeln!(self.output, "{}", WIN_MESSAGE)?;
        } else {
            writeln!(self.output, "{}", LOSS_MESSAGE)?;
        }
        Ok(status)
    }
}
