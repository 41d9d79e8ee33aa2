//! Scripted end-to-end session tests.

use tictactoe::{
    ComputerPlayer, HumanPlayer, Marker, Move, MoveError, Position, ScriptedConsole, Seat, Session,
};

fn human_seats() -> [Seat; 2] {
    [
        Seat::new(Marker::X, Box::new(HumanPlayer::new("Xavier"))),
        Seat::new(Marker::O, Box::new(HumanPlayer::new("Olive"))),
    ]
}

#[test]
fn test_session_plays_one_round_to_a_win() {
    // X takes the top row: 1, 2, 3
    let console = ScriptedConsole::new(["1", "4", "2", "5", "3", "n"]);
    let mut session = Session::new(human_seats(), 0, console);
    session.run().expect("scripted session");

    assert_eq!(session.rounds_played(), 1);
    assert_eq!(session.console().lines()[0], "Welcome to Tic Tac Toe!");
    assert!(session.console().clears() > 0);
    assert!(session.console().printed("Xavier won!"));
    assert!(session.console().printed("Thanks for playing Tic Tac Toe!"));
}

#[test]
fn test_invalid_move_input_is_reprompted() {
    let console = ScriptedConsole::new(["banana", "0", "10", "1", "4", "2", "5", "3", "n"]);
    let mut session = Session::new(human_seats(), 0, console);
    session.run().expect("scripted session");

    assert!(session.console().printed("Sorry, that's not a valid choice."));
    assert!(session.console().printed("Xavier won!"));
}

#[test]
fn test_occupied_square_is_reprompted() {
    // Olive first tries square 1, which Xavier already holds
    let console = ScriptedConsole::new(["1", "1", "4", "2", "5", "3", "n"]);
    let mut session = Session::new(human_seats(), 0, console);
    session.run().expect("scripted session");

    assert!(session.console().printed("Sorry, that's not a valid choice."));
    assert_eq!(session.rounds_played(), 1);
}

#[test]
fn test_session_ends_in_a_tie() {
    let console = ScriptedConsole::new(["1", "5", "3", "2", "4", "6", "8", "7", "9", "n"]);
    let mut session = Session::new(human_seats(), 0, console);
    session.run().expect("scripted session");

    assert!(session.console().printed("It's a tie!"));
    assert_eq!(session.rounds_played(), 1);
}

#[test]
fn test_continue_prompt_is_revalidated_and_replays() {
    let console = ScriptedConsole::new([
        // Round one: X wins the top row
        "1", "4", "2", "5", "3", // Continue prompt: invalid, then yes
        "maybe", "y", // Round two: X wins again
        "1", "4", "2", "5", "3", // Quit (uppercase accepted)
        "N",
    ]);
    let mut session = Session::new(human_seats(), 0, console);
    session.run().expect("scripted session");

    assert!(session.console().printed("Sorry, must be y or n."));
    assert!(session.console().printed("Let's play again!"));
    assert_eq!(session.rounds_played(), 2);
}

#[test]
fn test_no_moves_accepted_after_session_over() {
    let console = ScriptedConsole::new(["1", "4", "2", "5", "3", "n"]);
    let mut session = Session::new(human_seats(), 0, console);
    session.run().expect("scripted session");

    assert!(session.round().is_over());
    let mut round = session.round().clone();
    let result = round.apply(Move::new(Marker::O, Position::Center));
    assert_eq!(result, Err(MoveError::RoundOver));
}

#[test]
fn test_computer_versus_computer_reaches_an_outcome() {
    let seats = [
        Seat::new(Marker::X, Box::new(ComputerPlayer::seeded("Hal", 3))),
        Seat::new(Marker::O, Box::new(ComputerPlayer::seeded("Sal", 4))),
    ];
    // Only the continue prompt needs input
    let console = ScriptedConsole::new(["n"]);
    let mut session = Session::new(seats, 0, console);
    session.run().expect("scripted session");

    assert_eq!(session.rounds_played(), 1);
    assert!(session.round().is_over());
    assert!(session.round().outcome().is_some());
}

#[test]
fn test_computer_moves_first_when_configured() {
    let seats = [
        Seat::new(Marker::X, Box::new(HumanPlayer::new("You"))),
        Seat::new(Marker::O, Box::new(ComputerPlayer::seeded("Computer", 9))),
    ];
    let console = ScriptedConsole::new(["n"]);
    let session = Session::new(seats, 1, console);
    assert_eq!(session.round().active(), 1);
}

#[test]
fn test_closed_input_is_a_hard_error() {
    let console = ScriptedConsole::new(Vec::<String>::new());
    let mut session = Session::new(human_seats(), 0, console);
    assert!(session.run().is_err());
}
