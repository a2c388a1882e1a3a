#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use rand::rngs::SmallRng;

use crate::{
    common::{Action, GridError, Outcome},
    config::Difficulty,
    game::GameStatus,
    grid::{Coordinate, Grid},
    ui::render_grid,
};

use super::Player;

const ACTION_PROMPT: &str = "Mark or reveal a coordinate Ex. \"R 1 2\", \"F 1 2\" : ";
const DIFFICULTY_PROMPT: &str = "Choose difficulty level (1, 2, 3): ";

/// A parsed line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Help,
    Quit,
}

/// Parse a turn command such as `R 3 4` or `f 0 8` against a grid of the
/// given size.
pub fn parse_command(input: &str, width: usize, height: usize) -> Result<Command, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        [word] if word.eq_ignore_ascii_case("help") => return Ok(Command::Help),
        [word] if word.eq_ignore_ascii_case("quit") => return Ok(Command::Quit),
        [_, _, _] => {}
        [] => return Err("Empty input".to_string()),
        _ => {
            return Err(format!(
                "Expected 3 fields (action row column), got {}",
                parts.len()
            ))
        }
    }
    let reveal = if parts[0].eq_ignore_ascii_case("r") {
        true
    } else if parts[0].eq_ignore_ascii_case("f") {
        false
    } else {
        return Err(format!("Unknown action '{}' - use R or F", parts[0]));
    };
    let row = parse_index(parts[1], "Row", height)?;
    let col = parse_index(parts[2], "Column", width)?;
    let coord = Coordinate::new(row, col);
    Ok(Command::Act(if reveal {
        Action::Reveal(coord)
    } else {
        Action::Flag(coord)
    }))
}

fn parse_index(field: &str, what: &str, limit: usize) -> Result<usize, String> {
    let value: usize = field
        .parse()
        .map_err(|_| format!("{} '{}' is not a number", what, field))?;
    if value >= limit {
        return Err(format!(
            "{} {} out of bounds - must be 0-{}",
            what,
            value,
            limit - 1
        ));
    }
    Ok(value)
}

/// Parse a 1-based difficulty menu choice.
pub fn parse_difficulty(input: &str) -> Result<Difficulty, String> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", input.trim()))?;
    Difficulty::from_menu(choice)
        .ok_or_else(|| format!("Level {} does not exist - choose 1, 2 or 3", choice))
}

/// Console player reading commands from `R` and printing to `W`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn emit(&mut self, text: &str) {
        let res = self
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush());
        if let Err(err) = res {
            log::warn!("console write failed: {}", err);
        }
    }

    /// Next input line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until a valid difficulty is entered. Returns `None` if input
    /// ends first.
    pub fn choose_difficulty(&mut self) -> io::Result<Option<Difficulty>> {
        loop {
            self.emit(DIFFICULTY_PROMPT);
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_difficulty(&line) {
                Ok(difficulty) => return Ok(Some(difficulty)),
                Err(e) => self.emit(&format!("Invalid entry: {}\n", e)),
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_action(&mut self, _rng: &mut SmallRng, grid: &Grid) -> Option<Action> {
        loop {
            self.emit(&render_grid(grid, false));
            self.emit(ACTION_PROMPT);
            let line = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(err) => {
                    log::error!("failed to read command: {}", err);
                    return None;
                }
            };
            match parse_command(&line, grid.width(), grid.height()) {
                Ok(Command::Act(action)) => return Some(action),
                Ok(Command::Help) => self.emit(HELP),
                Ok(Command::Quit) => return None,
                Err(e) => self.emit(&format!("Invalid input: {}\n", e)),
            }
        }
    }

    fn handle_outcome(&mut self, action: Action, outcome: Outcome) {
        if let Outcome::Flagged(false) = outcome {
            self.emit(&format!("Flag removed at {}\n", action.coord()));
        }
    }

    fn handle_rejected(&mut self, _action: Action, err: GridError) {
        self.emit(&format!("{}\n", err));
    }

    fn handle_game_over(&mut self, grid: &Grid, status: GameStatus) {
        match status {
            GameStatus::Lost => {
                self.emit(&render_grid(grid, true));
                self.emit("Game Over\n");
            }
            GameStatus::Won => {
                self.emit(&render_grid(grid, true));
                self.emit("Good Game!\n");
            }
            GameStatus::InProgress => self.emit("Game abandoned.\n"),
        }
    }
}

const HELP: &str = "\
Commands:
  R <row> <col>   reveal a cell
  F <row> <col>   flag or unflag a cell
  help            show this message
  quit            give up the game
Board symbols: ? hidden, F flagged, * mine, 0-8 adjacent mines
";
