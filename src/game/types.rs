//! Core domain types: markers, squares, and the board.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A player's marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// The X marker (by convention, the human's).
    X,
    /// The O marker (by convention, the computer's).
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Unmarked square.
    Empty,
    /// Square holding a marker.
    Marked(Marker),
}

/// The 3x3 board.
///
/// Squares are stored in row-major order and addressed by [`Position`].
/// A marked square stays marked until [`Board::reset`]; everything else
/// (unmarked positions, fullness, the winning marker) is derived on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, position: Position) -> Square {
        self.squares[position.index()]
    }

    /// Checks whether the square at the given position is unmarked.
    pub fn is_unmarked(&self, position: Position) -> bool {
        self.get(position) == Square::Empty
    }

    /// Places a marker at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square already holds a
    /// marker. Out-of-range positions are unrepresentable by [`Position`].
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position, marker: Marker) -> Result<(), MoveError> {
        if !self.is_unmarked(position) {
            return Err(MoveError::SquareOccupied(position));
        }
        self.squares[position.index()] = Square::Marked(marker);
        Ok(())
    }

    /// Returns the unmarked positions in ascending key order.
    pub fn unmarked_positions(&self) -> Vec<Position> {
        Position::iter()
            .filter(|pos| self.is_unmarked(*pos))
            .collect()
    }

    /// Checks if every square is marked.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Returns the marker occupying a full triple, if any.
    pub fn winning_marker(&self) -> Option<Marker> {
        super::rules::winning_marker(self)
    }

    /// True iff some triple is fully occupied by one marker.
    pub fn has_winner(&self) -> bool {
        self.winning_marker().is_some()
    }

    /// Restores every square to [`Square::Empty`]. Idempotent.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as the 3-row grid shown to players.
    ///
    /// Marked squares show their marker, unmarked squares are blank.
    pub fn display(&self) -> String {
        const ROWS: [[Position; 3]; 3] = [
            [Position::TopLeft, Position::TopCenter, Position::TopRight],
            [Position::MiddleLeft, Position::Center, Position::MiddleRight],
            [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
        ];

        let mut out = String::new();
        for (i, row) in ROWS.iter().enumerate() {
            let cell = |pos: Position| match self.get(pos) {
                Square::Marked(marker) => marker.to_string(),
                Square::Empty => " ".to_string(),
            };
            out.push_str("     |     |\n");
            out.push_str(&format!(
                "  {}  |  {}  |  {}\n",
                cell(row[0]),
                cell(row[1]),
                cell(row[2])
            ));
            out.push_str("     |     |");
            if i < 2 {
                out.push_str("\n-----+-----+-----\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
