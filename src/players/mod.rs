//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::Console;
use crate::game::{Board, Position};
use anyhow::Result;

/// A controller that chooses moves for one seat.
pub trait Player {
    /// Chooses an unmarked position on the board.
    ///
    /// Implementations that solicit external input re-prompt locally on
    /// invalid content and only error when the input channel itself fails.
    fn choose(&mut self, board: &Board, console: &mut dyn Console) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
