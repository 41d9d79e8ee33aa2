//! Command-line interface for tictactoe.

use clap::Parser;

/// Play tic-tac-toe in the terminal against a random computer opponent.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed the computer opponent for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let the computer take the first move
    #[arg(long)]
    pub computer_first: bool,
}
