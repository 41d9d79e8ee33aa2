//! Board positions, keyed 1-9 in row-major order.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A position on the 3x3 board.
///
/// Positions carry their key (1-9, row-major) and are the only way to
/// address a square, so an out-of-range index is unrepresentable. Raw
/// integers appear only at the parsing boundary via [`Position::from_key`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (key 1)
    TopLeft,
    /// Top-center (key 2)
    TopCenter,
    /// Top-right (key 3)
    TopRight,
    /// Middle-left (key 4)
    MiddleLeft,
    /// Center (key 5)
    Center,
    /// Middle-right (key 6)
    MiddleRight,
    /// Bottom-left (key 7)
    BottomLeft,
    /// Bottom-center (key 8)
    BottomCenter,
    /// Bottom-right (key 9)
    BottomRight,
}

impl Position {
    /// Returns the 1-9 key shown to players.
    pub fn key(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Converts the position to a 0-8 array index.
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from its 1-9 key. Returns `None` if out of range.
    pub fn from_key(key: u8) -> Option<Self> {
        Position::iter().find(|pos| pos.key() == key)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_ascend_in_declaration_order() {
        let keys: Vec<u8> = Position::iter().map(Position::key).collect();
        assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_from_key_round_trip() {
        for pos in Position::iter() {
            assert_eq!(Position::from_key(pos.key()), Some(pos));
        }
    }

    #[test]
    fn test_from_key_out_of_range() {
        assert_eq!(Position::from_key(0), None);
        assert_eq!(Position::from_key(10), None);
    }
}
