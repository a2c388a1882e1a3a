use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::{common::Action, grid::Grid};

use super::Player;

/// Player that reveals a uniformly random hidden cell each turn.
#[derive(Debug, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn select_action(&mut self, rng: &mut SmallRng, grid: &Grid) -> Option<Action> {
        let hidden: Vec<_> = grid
            .enumerate()
            .filter(|(_, cell)| !cell.is_revealed() && !cell.is_flagged())
            .map(|(coord, _)| coord)
            .collect();
        if hidden.is_empty() {
            return None;
        }
        let pick = hidden[rng.random_range(0..hidden.len())];
        Some(Action::Reveal(pick))
    }
}
