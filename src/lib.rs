//! Tic-tac-toe round engine and console session driver.
//!
//! # Architecture
//!
//! - **Game**: board storage, pure win/draw rules, and the round state
//!   machine with a single active-seat index for turn ownership
//! - **Players**: the [`Player`] trait plus a re-prompting human and a
//!   seedable random computer
//! - **Console**: line-oriented I/O capability so the core never touches a
//!   terminal directly
//! - **Session**: the rounds loop with the continue/quit prompt
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{ComputerPlayer, HumanPlayer, Marker, Seat, Session, StdConsole};
//!
//! # fn example() -> anyhow::Result<()> {
//! let seats = [
//!     Seat::new(Marker::X, Box::new(HumanPlayer::new("You"))),
//!     Seat::new(Marker::O, Box::new(ComputerPlayer::seeded("Computer", 42))),
//! ];
//! let mut session = Session::new(seats, 0, StdConsole);
//! session.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod console;
mod game;
mod players;
mod session;

// Crate-level exports - I/O capability
pub use console::{Console, ScriptedConsole, StdConsole};

// Crate-level exports - game engine
pub use game::{Board, Marker, Move, MoveError, Outcome, Position, Round, RoundState, Square};

// Crate-level exports - players
pub use players::{ComputerPlayer, HumanPlayer, Player};

// Crate-level exports - session driver
pub use session::{Seat, Session};
