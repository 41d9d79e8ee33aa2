//! Tic-tac-toe - console entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tictactoe::cli::Cli;
use tictactoe::{ComputerPlayer, HumanPlayer, Marker, Seat, Session, StdConsole};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    info!(seed = ?cli.seed, computer_first = cli.computer_first, "starting session");

    let rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    let seats = [
        Seat::new(Marker::X, Box::new(HumanPlayer::new("You"))),
        Seat::new(Marker::O, Box::new(ComputerPlayer::new("Computer", rng))),
    ];
    let first = if cli.computer_first { 1 } else { 0 };

    let mut session = Session::new(seats, first, StdConsole);
    session.run()
}
