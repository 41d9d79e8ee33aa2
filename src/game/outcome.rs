//! Round outcomes.

use super::types::Marker;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The marker completed a triple.
    Win(Marker),
    /// The board filled with no winning triple.
    Draw,
}

impl Outcome {
    /// Returns the winning marker, if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Win(marker) => Some(*marker),
            Outcome::Draw => None,
        }
    }

    /// True if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(marker) => write!(f, "{marker} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
