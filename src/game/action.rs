//! First-class move events and their errors.
//!
//! A move is a domain event, not a side effect: it records the marker and
//! position so rounds can keep a history for logging and replay in tests.

use super::position::Position;
use super::types::Marker;
use serde::{Deserialize, Serialize};

/// A move: a marker placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marker being placed.
    pub marker: Marker,
    /// The position receiving the marker.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(marker: Marker, position: Position) -> Self {
        Self { marker, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position already holds a marker.
    #[display("Square {} is already marked", _0)]
    SquareOccupied(Position),

    /// The round has already reached an outcome.
    #[display("The round is already over")]
    RoundOver,
}

impl std::error::Error for MoveError {}
