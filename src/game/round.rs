//! The round state machine.
//!
//! A round is one playthrough from an empty board to a win or draw. Turn
//! ownership is a single `active` index (0 or 1) on the round, so exactly
//! one seat holds the turn by construction. The driver maps the index to
//! whichever seat it belongs to.

use super::action::{Move, MoveError};
use super::outcome::Outcome;
use super::types::Board;
use tracing::{debug, instrument};

/// State of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the active seat to move.
    AwaitingMove,
    /// The round reached an outcome; no further moves are accepted.
    Over(Outcome),
}

/// One playthrough: a board, the active-seat index, and the round state.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    /// Index (0 or 1) of the seat holding the turn.
    active: usize,
    state: RoundState,
    history: Vec<Move>,
}

impl Round {
    /// Creates a round with an empty board, awaiting a move from `first`.
    pub fn new(first: usize) -> Self {
        debug_assert!(first < 2, "seat index must be 0 or 1");
        Self {
            board: Board::new(),
            active: first,
            state: RoundState::AwaitingMove,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the index of the seat holding the turn.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Returns the round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the moves applied so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the round has an outcome.
    pub fn is_over(&self) -> bool {
        matches!(self.state, RoundState::Over(_))
    }

    /// Returns the outcome, if the round is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            RoundState::Over(outcome) => Some(outcome),
            RoundState::AwaitingMove => None,
        }
    }

    /// Applies a move and evaluates the terminal condition.
    ///
    /// On a non-terminal move the active index flips to the other seat. A
    /// winning move ends the round with [`Outcome::Win`]; filling the board
    /// without a winner ends it with [`Outcome::Draw`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::RoundOver`] once the round has an outcome, and
    /// [`MoveError::SquareOccupied`] for a position already marked.
    #[instrument(skip(self), fields(active = self.active))]
    pub fn apply(&mut self, action: Move) -> Result<RoundState, MoveError> {
        if self.is_over() {
            return Err(MoveError::RoundOver);
        }

        self.board.place(action.position, action.marker)?;
        self.history.push(action);

        if let Some(marker) = self.board.winning_marker() {
            self.state = RoundState::Over(Outcome::Win(marker));
            debug!(%marker, "round won");
        } else if self.board.is_full() {
            self.state = RoundState::Over(Outcome::Draw);
            debug!("round drawn");
        } else {
            self.active ^= 1;
        }

        Ok(self.state)
    }

    /// Resets to an empty board awaiting a move from `first`.
    #[instrument(skip(self))]
    pub fn reset(&mut self, first: usize) {
        debug_assert!(first < 2, "seat index must be 0 or 1");
        self.board.reset();
        self.history.clear();
        self.active = first;
        self.state = RoundState::AwaitingMove;
    }
}
