use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    common::{Action, GridError, Outcome},
    config::Difficulty,
    grid::{Cell, Coordinate, Grid},
    player::Player,
    reveal,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Core game logic: owns the grid and applies player actions to it.
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    status: GameStatus,
    moves: usize,
}

impl GameEngine {
    /// Start a new game on a freshly generated grid.
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self::from_grid(Grid::generate(difficulty, rng))
    }

    /// Resume play on an existing grid. The status is derived from the
    /// grid's revealed cells.
    pub fn from_grid(grid: Grid) -> Self {
        let exploded = grid.enumerate().any(|(_, c)| c.has_mine() && c.is_revealed());
        let status = if exploded {
            GameStatus::Lost
        } else if grid.all_safe_revealed() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };
        Self {
            grid,
            status,
            moves: 0,
        }
    }

    /// Immutable view of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the engine, returning its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of actions applied successfully.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Apply a single player action.
    pub fn apply(&mut self, action: Action) -> Result<Outcome, GridError> {
        match action {
            Action::Reveal(coord) => self.reveal(coord),
            Action::Flag(coord) => self.flag(coord),
        }
    }

    /// Reveal the cell at `coord`, flooding outward when it has no
    /// adjacent mines.
    pub fn reveal(&mut self, coord: Coordinate) -> Result<Outcome, GridError> {
        let cell = *self.check_target(coord)?;
        if cell.is_flagged() {
            return Err(GridError::CellFlagged(coord));
        }
        self.moves += 1;
        self.grid.set_revealed(coord);

        if cell.has_mine() {
            self.status = GameStatus::Lost;
            log::info!("mine revealed at {} after {} moves", coord, self.moves);
            return Ok(Outcome::Exploded);
        }

        let mut cleared = 1;
        if cell.adjacent_mines() == 0 {
            for pos in reveal::connected_region(&self.grid, coord) {
                if self.grid.set_revealed(pos) {
                    cleared += 1;
                }
            }
        }
        log::debug!("revealed {} cells from {}", cleared, coord);

        if self.grid.all_safe_revealed() {
            self.status = GameStatus::Won;
            log::info!("grid cleared after {} moves", self.moves);
        }
        Ok(Outcome::Cleared(cleared))
    }

    /// Toggle the flag on a hidden cell.
    pub fn flag(&mut self, coord: Coordinate) -> Result<Outcome, GridError> {
        self.check_target(coord)?;
        let flagged = self.grid.toggle_flag(coord)?;
        self.moves += 1;
        log::debug!("flag at {} set to {}", coord, flagged);
        Ok(Outcome::Flagged(flagged))
    }

    fn check_target(&self, coord: Coordinate) -> Result<&Cell, GridError> {
        if self.status != GameStatus::InProgress {
            return Err(GridError::GameOver);
        }
        let cell = self.grid.get(coord).ok_or(GridError::OutOfBounds(coord))?;
        if cell.is_revealed() {
            return Err(GridError::AlreadyRevealed(coord));
        }
        Ok(cell)
    }

    /// Drive the game with `player` until it ends or the player stops
    /// supplying actions.
    pub fn play<P: Player + ?Sized>(&mut self, player: &mut P, rng: &mut SmallRng) -> GameStatus {
        while self.status == GameStatus::InProgress {
            let Some(action) = player.select_action(rng, &self.grid) else {
                log::info!("game abandoned after {} moves", self.moves);
                break;
            };
            match self.apply(action) {
                Ok(outcome) => player.handle_outcome(action, outcome),
                Err(err) => player.handle_rejected(action, err),
            }
        }
        player.handle_game_over(&self.grid, self.status);
        self.status
    }
}
