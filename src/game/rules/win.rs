//! Win detection over the eight fixed triples.

use super::super::{Board, Marker, Position, Square};
use tracing::instrument;

/// The eight winning triples, evaluated in fixed order:
/// rows, then columns, then diagonals.
pub const TRIPLES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the marker fully occupying a triple, if any.
///
/// Triples are checked in the fixed order above and the first match wins,
/// which keeps the result deterministic for tests. A triple with an
/// unmarked square or mixed markers never matches.
#[instrument]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    for [a, b, c] in TRIPLES {
        let square = board.get(a);
        if square != Square::Empty && square == board.get(b) && square == board.get(c) {
            if let Square::Marked(marker) = square {
                return Some(marker);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_marker(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Marker::X).unwrap();
        board.place(Position::TopCenter, Marker::X).unwrap();
        board.place(Position::TopRight, Marker::X).unwrap();
        assert_eq!(winning_marker(&board), Some(Marker::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Marker::O).unwrap();
        board.place(Position::Center, Marker::O).unwrap();
        board.place(Position::BottomRight, Marker::O).unwrap();
        assert_eq!(winning_marker(&board), Some(Marker::O));
    }

    #[test]
    fn test_every_triple_wins() {
        for triple in TRIPLES {
            let mut board = Board::new();
            for pos in triple {
                board.place(pos, Marker::X).unwrap();
            }
            assert_eq!(winning_marker(&board), Some(Marker::X), "{triple:?}");
        }
    }

    #[test]
    fn test_no_winner_two_marked_one_empty() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Marker::X).unwrap();
        board.place(Position::TopCenter, Marker::X).unwrap();
        assert_eq!(winning_marker(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_triple() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Marker::X).unwrap();
        board.place(Position::TopCenter, Marker::O).unwrap();
        board.place(Position::TopRight, Marker::X).unwrap();
        assert_eq!(winning_marker(&board), None);
    }
}
