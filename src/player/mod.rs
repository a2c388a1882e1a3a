use rand::rngs::SmallRng;

use crate::{
    common::{Action, GridError, Outcome},
    game::GameStatus,
    grid::Grid,
};

#[cfg(feature = "std")]
pub mod cli;
pub mod random;

#[cfg(feature = "std")]
pub use cli::*;
pub use random::RandomPlayer;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next action given the visible grid. Returning `None` ends
    /// the game early.
    fn select_action(&mut self, rng: &mut SmallRng, grid: &Grid) -> Option<Action>;

    /// Inform the player of the result of its last action.
    fn handle_outcome(&mut self, _action: Action, _outcome: Outcome) {}

    /// Inform the player that its last action was refused. The grid is
    /// unchanged.
    fn handle_rejected(&mut self, _action: Action, _err: GridError) {}

    /// Called once when play stops, whether finished or abandoned.
    fn handle_game_over(&mut self, _grid: &Grid, _status: GameStatus) {}
}
