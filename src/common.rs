//! Common types for the game: grid errors and action outcomes.

use crate::grid::Coordinate;

/// Command issued by a player for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Uncover the cell.
    Reveal(Coordinate),
    /// Place or remove a flag on the cell.
    Flag(Coordinate),
}

impl Action {
    /// Target cell of the action.
    pub fn coord(&self) -> Coordinate {
        match *self {
            Action::Reveal(c) | Action::Flag(c) => c,
        }
    }
}

/// Result of applying an action to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A mine was revealed; the game is lost.
    Exploded,
    /// Safe reveal, carrying the number of cells uncovered (origin included).
    Cleared(usize),
    /// Flag state changed; `true` if the cell is now flagged.
    Flagged(bool),
}

/// Errors returned by grid and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside the grid.
    OutOfBounds(Coordinate),
    /// The same cell was listed twice as a mine.
    DuplicateMine(Coordinate),
    /// Cell has already been revealed.
    AlreadyRevealed(Coordinate),
    /// Cell is flagged and must be unflagged before revealing.
    CellFlagged(Coordinate),
    /// The game has already been won or lost.
    GameOver,
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds(c) => write!(f, "Coordinate {} is outside the grid", c),
            GridError::DuplicateMine(c) => write!(f, "Mine listed twice at {}", c),
            GridError::AlreadyRevealed(_) => write!(f, "Cell already revealed."),
            GridError::CellFlagged(c) => {
                write!(f, "Cell {} is flagged; flag it again to remove the flag", c)
            }
            GridError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
