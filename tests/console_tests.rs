#![cfg(feature = "std")]

use std::io::Cursor;

use minesweeper::{
    Action, Command, CommandError, Console, Field, GameStatus, DEFAULT_MINES, LOSS_MESSAGE,
    MINES_PROMPT, MOVE_PROMPT, WIN_MESSAGE,
};

fn run(field: &mut Field, script: &str) -> (GameStatus, String) {
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let status = console.play(field).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();
    (status, output)
}

#[test]
fn test_parse_command() {
    assert_eq!(
        Command::parse("3 7 free"),
        Ok(Command { row: 7, col: 3, action: Action::Explore })
    );
    assert_eq!(
        Command::parse("  1   2 mine "),
        Ok(Command { row: 2, col: 1, action: Action::Mark })
    );
    assert_eq!(Command::parse("1 2"), Err(CommandError::WrongArity(2)));
    assert_eq!(Command::parse("1 2 free now"), Err(CommandError::WrongArity(4)));
    assert_eq!(
        Command::parse("a 2 free"),
        Err(CommandError::InvalidCoordinate("a".to_string()))
    );
    assert_eq!(
        Command::parse("1 -2 free"),
        Err(CommandError::InvalidCoordinate("-2".to_string()))
    );
    assert_eq!(
        Command::parse("1 2 flag"),
        Err(CommandError::UnknownAction("flag".to_string()))
    );
}

#[test]
fn test_command_error_messages() {
    assert_eq!(
        CommandError::UnknownAction("flag".to_string()).to_string(),
        "unknown action 'flag', use 'mine' or 'free'"
    );
    assert_eq!(
        CommandError::InvalidCoordinate("x".to_string()).to_string(),
        "'x' is not a valid coordinate"
    );
}

#[test]
fn test_winning_session() {
    let mut field = Field::with_layout(3, &[(1, 1)]).unwrap();
    let (status, output) = run(&mut field, "3 3 free\n");
    assert_eq!(status, GameStatus::Won);
    assert!(output.contains(MOVE_PROMPT));
    assert!(output.contains("1|.1/|\n2|11/|\n3|///|"));
    assert!(output.trim_end().ends_with(WIN_MESSAGE));
}

#[test]
fn test_losing_session() {
    let mut field = Field::with_layout(3, &[(2, 2)]).unwrap();
    let (status, output) = run(&mut field, "1 1 free\n2 2 free\n");
    assert_eq!(status, GameStatus::Lost);
    assert!(output.contains("1|1..|"));
    assert!(output.contains("2|.X.|"));
    assert!(output.trim_end().ends_with(LOSS_MESSAGE));
}

#[test]
fn test_column_comes_first() {
    // marking the only mine at row 1, column 3 wins outright
    let mut field = Field::with_layout(3, &[(1, 3)]).unwrap();
    let (status, output) = run(&mut field, "3 1 mine\n");
    assert_eq!(status, GameStatus::Won);
    assert!(output.contains("1|..*|"));
}

#[test]
fn test_invalid_lines_are_reported_and_skipped() {
    let mut field = Field::with_layout(3, &[(1, 1)]).unwrap();
    let (status, output) = run(&mut field, "hello\n\n9 9 free\n3 3 free\n");
    assert_eq!(status, GameStatus::Won);
    assert!(output.contains("Invalid command: expected '<column> <row> <mine|free>', got 1 word(s)"));
    assert_eq!(output.matches(MOVE_PROMPT).count(), 4);
}

#[test]
fn test_end_of_input_leaves_game_unfinished() {
    let mut field = Field::with_seed(4, 3, 1);
    let (status, output) = run(&mut field, "1 1 mine\n");
    assert_eq!(status, GameStatus::InProgress);
    assert!(!output.contains(WIN_MESSAGE));
    assert!(!output.contains(LOSS_MESSAGE));
}

#[test]
fn test_read_mine_count() {
    let mut console = Console::new(Cursor::new("lots\n12\n"), Vec::new());
    assert_eq!(console.read_mine_count().unwrap(), 12);
    let output = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(output.matches(MINES_PROMPT).count(), 2);
    assert!(output.contains("Invalid mine count 'lots'"));

    let mut console = Console::new(Cursor::new("\n"), Vec::new());
    assert_eq!(console.read_mine_count().unwrap(), DEFAULT_MINES);

    let mut console = Console::new(Cursor::new(""), Vec::new());
    assert!(console.read_mine_count().is_err());
}
