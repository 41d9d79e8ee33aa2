//! Game engine: board, rules, and the round state machine.

mod action;
mod outcome;
mod position;
mod round;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use outcome::Outcome;
pub use position::Position;
pub use round::{Round, RoundState};
pub use types::{Board, Marker, Square};
