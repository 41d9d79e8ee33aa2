//! Pure rules for evaluating board state.
//!
//! Win and draw evaluation are separated from board storage so they can be
//! tested in isolation and reused by the round state machine.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_marker;
