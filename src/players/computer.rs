//! Computer player choosing uniformly at random.

use super::Player;
use crate::console::Console;
use crate::game::{Board, Position};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{RngCore, SeedableRng};
use tracing::{debug, instrument};

/// Computer player that picks uniformly among unmarked positions.
///
/// The random source is injected so tests can seed it deterministically.
pub struct ComputerPlayer {
    name: String,
    rng: Box<dyn RngCore>,
}

impl ComputerPlayer {
    /// Creates a computer player with the given random source.
    pub fn new(name: impl Into<String>, rng: Box<dyn RngCore>) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }

    /// Creates a computer player seeded for reproducible move selection.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self::new(name, Box::new(StdRng::seed_from_u64(seed)))
    }
}

impl Player for ComputerPlayer {
    /// A non-full board always has at least one unmarked position, so this
    /// only errors if called on a full board.
    #[instrument(skip(self, board, _console), fields(player = %self.name))]
    fn choose(&mut self, board: &Board, _console: &mut dyn Console) -> Result<Position> {
        let open = board.unmarked_positions();
        let position = open
            .choose(&mut *self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no unmarked positions left"))?;
        debug!(%position, "computer chose");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for ComputerPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputerPlayer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::game::Marker;

    #[test]
    fn test_chooses_only_unmarked() {
        let mut board = Board::new();
        board.place(Position::Center, Marker::X).unwrap();
        board.place(Position::TopLeft, Marker::O).unwrap();

        let mut console = ScriptedConsole::default();
        let mut player = ComputerPlayer::seeded("Computer", 7);
        for _ in 0..50 {
            let position = player.choose(&board, &mut console).unwrap();
            assert!(board.unmarked_positions().contains(&position));
        }
    }

    #[test]
    fn test_forced_when_one_left() {
        let mut board = Board::new();
        for pos in Board::new().unmarked_positions() {
            if pos != Position::BottomRight {
                board.place(pos, Marker::X).unwrap();
            }
        }

        let mut console = ScriptedConsole::default();
        let mut player = ComputerPlayer::seeded("Computer", 0);
        assert_eq!(
            player.choose(&board, &mut console).unwrap(),
            Position::BottomRight
        );
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let board = Board::new();
        let mut console = ScriptedConsole::default();
        let mut first = ComputerPlayer::seeded("A", 42);
        let mut second = ComputerPlayer::seeded("B", 42);
        for _ in 0..9 {
            assert_eq!(
                first.choose(&board, &mut console).unwrap(),
                second.choose(&board, &mut console).unwrap()
            );
        }
    }

    #[test]
    fn test_full_board_errors() {
        let mut board = Board::new();
        for pos in Board::new().unmarked_positions() {
            board.place(pos, Marker::X).unwrap();
        }

        let mut console = ScriptedConsole::default();
        let mut player = ComputerPlayer::seeded("Computer", 1);
        assert!(player.choose(&board, &mut console).is_err());
    }
}
