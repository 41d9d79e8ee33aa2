//! Human player that solicits moves over the console.

use super::Player;
use crate::console::Console;
use crate::game::{Board, Position};
use anyhow::Result;
use tracing::{debug, instrument};

/// Human player driven by line input.
#[derive(Debug)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    /// Prompts with the unmarked keys and re-prompts until the input parses
    /// to one of them. Only a failed read (closed input) is an error.
    #[instrument(skip(self, board, console), fields(player = %self.name))]
    fn choose(&mut self, board: &Board, console: &mut dyn Console) -> Result<Position> {
        let open = board.unmarked_positions();
        let keys = open
            .iter()
            .map(|pos| pos.key().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        console.print(&format!("Choose a square: [{keys}]"))?;

        loop {
            let line = console.read_line()?;
            let choice = line
                .parse::<u8>()
                .ok()
                .and_then(Position::from_key)
                .filter(|pos| open.contains(pos));
            match choice {
                Some(position) => {
                    debug!(%position, "human chose");
                    return Ok(position);
                }
                None => {
                    debug!(input = %line, "invalid choice, re-prompting");
                    console.print("Sorry, that's not a valid choice.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
