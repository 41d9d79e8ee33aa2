//! Draw detection.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (no unmarked squares).
///
/// A full board with no winning marker is a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|square| *square != Square::Empty)
}
