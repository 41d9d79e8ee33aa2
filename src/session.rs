//! Session driver: plays rounds until the player declines to continue.

use crate::console::Console;
use crate::game::{Marker, Move, Outcome, Round, RoundState};
use crate::players::Player;
use anyhow::Result;
use tracing::{debug, info, instrument};

/// A marker paired with the controller that plays it.
pub struct Seat {
    marker: Marker,
    controller: Box<dyn Player>,
}

impl Seat {
    /// Creates a seat.
    pub fn new(marker: Marker, controller: Box<dyn Player>) -> Self {
        Self { marker, controller }
    }

    /// Returns the seat's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Returns the controller's display name.
    pub fn name(&self) -> &str {
        self.controller.name()
    }
}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seat")
            .field("marker", &self.marker)
            .field("name", &self.controller.name())
            .finish_non_exhaustive()
    }
}

/// Drives consecutive rounds over a console until the player quits.
///
/// All invalid external input (move choice, continue choice) is handled by
/// local re-prompting; the session only ends through an explicit "n" at the
/// continue prompt or a failed read on a closed input channel.
#[derive(Debug)]
pub struct Session<C: Console> {
    seats: [Seat; 2],
    round: Round,
    console: C,
    /// Seat that moves first in every round.
    first: usize,
    rounds_played: u32,
}

impl<C: Console> Session<C> {
    /// Creates a session. `first` is the seat index (0 or 1) that opens
    /// every round.
    pub fn new(seats: [Seat; 2], first: usize, console: C) -> Self {
        debug_assert!(first < 2, "seat index must be 0 or 1");
        debug_assert!(
            seats[0].marker != seats[1].marker,
            "seats must hold distinct markers"
        );
        Self {
            seats,
            round: Round::new(first),
            console,
            first,
            rounds_played: 0,
        }
    }

    /// Returns the current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Number of rounds played to an outcome.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the console, for inspecting scripted output in tests.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Plays rounds until the player declines to continue.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.print("Welcome to Tic Tac Toe!")?;

        loop {
            self.play_round()?;
            self.rounds_played += 1;
            if !self.play_again()? {
                break;
            }
            self.console.print("Let's play again!")?;
            self.round.reset(self.first);
        }

        info!(rounds = self.rounds_played, "session over");
        self.console.print("Thanks for playing Tic Tac Toe!")?;
        Ok(())
    }

    /// Plays one round to its outcome.
    fn play_round(&mut self) -> Result<()> {
        self.show_board()?;
        loop {
            let state = {
                let Session {
                    seats,
                    round,
                    console,
                    ..
                } = self;
                let seat = &mut seats[round.active()];
                let position = seat.controller.choose(round.board(), &mut *console)?;
                let action = Move::new(seat.marker, position);
                debug!(player = seat.controller.name(), %action, "applying move");
                round.apply(action)?
            };
            self.show_board()?;
            if let RoundState::Over(outcome) = state {
                self.show_result(outcome)?;
                return Ok(());
            }
        }
    }

    fn show_board(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.print(&format!(
            "{} ({}) vs {} ({})",
            self.seats[0].name(),
            self.seats[0].marker,
            self.seats[1].name(),
            self.seats[1].marker,
        ))?;
        self.console.print("")?;
        self.console.print(&self.round.board().display())?;
        self.console.print("")?;
        Ok(())
    }

    fn show_result(&mut self, outcome: Outcome) -> Result<()> {
        info!(%outcome, "round over");
        match outcome {
            Outcome::Win(marker) => {
                let name = self
                    .seats
                    .iter()
                    .find(|seat| seat.marker == marker)
                    .map_or_else(|| marker.to_string(), |seat| seat.name().to_string());
                self.console.print(&format!("{name} won!"))?;
            }
            Outcome::Draw => {
                self.console.print("It's a tie!")?;
            }
        }
        Ok(())
    }

    /// Asks whether to play another round, re-prompting until "y" or "n"
    /// (case-insensitive).
    fn play_again(&mut self) -> Result<bool> {
        loop {
            self.console.print("Would you like to play again? (y/n)")?;
            match self.console.read_line()?.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.console.print("Sorry, must be y or n.")?,
            }
        }
    }
}
