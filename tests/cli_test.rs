use std::io::Cursor;

use minesweeper::{CliPlayer, Coordinate, Difficulty, GameEngine, GameStatus, Grid};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn corner_game() -> GameEngine {
    GameEngine::from_grid(Grid::with_mines(Difficulty::Beginner, [Coordinate::new(0, 0)]).unwrap())
}

fn play_script(engine: &mut GameEngine, script: &str) -> (GameStatus, String) {
    let mut rng = SmallRng::seed_from_u64(12345);
    let mut player = CliPlayer::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let status = engine.play(&mut player, &mut rng);
    let output = String::from_utf8(player.into_output()).expect("non utf8 output");
    (status, output)
}

#[test]
fn scripted_win() {
    let mut engine = corner_game();
    let (status, output) = play_script(&mut engine, "bogus\nR 9 9\nF 0 0\nR 8 8\n");
    assert_eq!(status, GameStatus::Won);
    assert!(output.contains("Invalid input"));
    assert!(output.contains("Mark or reveal a coordinate"));
    assert!(output.contains("Revealed 80"));
    assert!(output.trim_end().ends_with("Good Game!"));
    // the final board shows the mine
    assert!(output.contains("0   * 1 0"));
}

#[test]
fn scripted_loss() {
    let mut engine = corner_game();
    let (status, output) = play_script(&mut engine, "r 0 0\n");
    assert_eq!(status, GameStatus::Lost);
    assert!(output.trim_end().ends_with("Game Over"));
    assert_eq!(engine.grid().total_revealed(), 1);
}

#[test]
fn repeated_reveal_is_reported() {
    let mut engine = corner_game();
    let (status, output) = play_script(&mut engine, "R 0 1\nR 0 1\nquit\n");
    assert_eq!(status, GameStatus::InProgress);
    assert!(output.contains("Cell already revealed."));
    assert!(output.contains("Game abandoned."));
}

#[test]
fn flag_then_unflag() {
    let mut engine = corner_game();
    let (_, output) = play_script(&mut engine, "F 2 2\nR 2 2\nF 2 2\n");
    assert!(output.contains("is flagged"));
    assert!(output.contains("Flag removed at (2, 2)"));
    assert!(!engine.grid()[Coordinate::new(2, 2)].is_flagged());
}

#[test]
fn end_of_input_abandons_game() {
    let mut engine = corner_game();
    let (status, output) = play_script(&mut engine, "help\n");
    assert_eq!(status, GameStatus::InProgress);
    assert!(output.contains("Commands:"));
    assert!(output.contains("Game abandoned."));
}

#[test]
fn difficulty_menu_reprompts() {
    let mut player = CliPlayer::new(Cursor::new(b"5\nabc\n2\n".to_vec()), Vec::new());
    let choice = player.choose_difficulty().unwrap();
    assert_eq!(choice, Some(Difficulty::Intermediate));
    let output = String::from_utf8(player.into_output()).unwrap();
    assert_eq!(output.matches("Invalid entry").count(), 2);
    assert_eq!(output.matches("Choose difficulty level (1, 2, 3): ").count(), 3);
}

#[test]
fn difficulty_menu_handles_eof() {
    let mut player = CliPlayer::new(Cursor::new(Vec::new()), Vec::new());
    assert_eq!(player.choose_difficulty().unwrap(), None);
}
