//! Grid storage, cell state and randomized mine placement.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use rand::Rng;

use crate::common::GridError;
use crate::config::{Difficulty, MAX_ADJACENT};

/// Row/column offsets of the eight surrounding cells.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Location of a cell on the grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed offset, returning `None` on underflow.
    fn offset(self, (dr, dc): (isize, isize)) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A single square of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub(crate) adjacent_mines: u8,
    pub(crate) has_mine: bool,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
}

impl Cell {
    /// Number of mines among the surrounding cells. Always 0 for a mine.
    pub fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub fn is_flagged(&self) -> bool {
        self.is_flagged
    }
}

/// Rectangular minefield, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    difficulty: Difficulty,
    width: usize,
    height: usize,
    total_mines: usize,
    total_revealed: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid for `difficulty` with mines placed at random.
    ///
    /// Cells are drawn uniformly and redrawn on collision until the preset's
    /// mine count is reached, then adjacency counts are filled in.
    pub fn generate<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        let preset = difficulty.preset();
        let mut grid = Self::empty(difficulty);
        let total = preset.cells();
        let mut placed = 0;
        while placed < preset.mines() {
            let index = rng.random_range(0..total);
            if grid.cells[index].has_mine {
                continue;
            }
            grid.cells[index].has_mine = true;
            placed += 1;
        }
        grid.total_mines = placed;
        grid.count_adjacent();
        log::debug!(
            "generated {} grid ({}x{}, {} mines)",
            difficulty,
            grid.width,
            grid.height,
            grid.total_mines
        );
        grid
    }

    /// Build a grid with the dimensions of `difficulty` and mines at exactly
    /// the given coordinates.
    pub fn with_mines<I>(difficulty: Difficulty, mines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut grid = Self::empty(difficulty);
        for coord in mines {
            let index = grid.index_of(coord).ok_or(GridError::OutOfBounds(coord))?;
            if grid.cells[index].has_mine {
                return Err(GridError::DuplicateMine(coord));
            }
            grid.cells[index].has_mine = true;
            grid.total_mines += 1;
        }
        grid.count_adjacent();
        Ok(grid)
    }

    fn empty(difficulty: Difficulty) -> Self {
        let preset = difficulty.preset();
        Self {
            difficulty,
            width: preset.width(),
            height: preset.height(),
            total_mines: 0,
            total_revealed: 0,
            cells: vec![Cell::default(); preset.cells()],
        }
    }

    fn count_adjacent(&mut self) {
        let mines: Vec<Coordinate> = self.mine_coords().collect();
        for mine in mines {
            let around: Vec<Coordinate> = self.neighbours(mine).collect();
            for n in around {
                self[n].adjacent_mines += 1;
                debug_assert!(self[n].adjacent_mines <= MAX_ADJACENT);
            }
        }
        // counts on mined cells carry no meaning
        for cell in self.cells.iter_mut().filter(|c| c.has_mine) {
            cell.adjacent_mines = 0;
        }
    }

    fn index_of(&self, coord: Coordinate) -> Option<usize> {
        (coord.row < self.height && coord.col < self.width)
            .then(|| coord.row * self.width + coord.col)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn total_mines(&self) -> usize {
        self.total_mines
    }

    pub fn total_revealed(&self) -> usize {
        self.total_revealed
    }

    /// Whether `coord` lies on the grid.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.index_of(coord).is_some()
    }

    pub fn get(&self, coord: Coordinate) -> Option<&Cell> {
        self.index_of(coord).map(|i| &self.cells[i])
    }

    fn get_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        self.index_of(coord).map(move |i| &mut self.cells[i])
    }

    /// In-bounds cells among the eight surrounding `coord`.
    pub fn neighbours(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&dir| coord.offset(dir))
            .filter(move |&n| self.contains(n))
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Coordinate::new(row, col)))
    }

    /// Cells paired with their coordinates, in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (Coordinate, &Cell)> {
        self.coords().zip(self.cells.iter())
    }

    /// Coordinates of all mined cells.
    pub fn mine_coords(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.enumerate()
            .filter(|(_, cell)| cell.has_mine)
            .map(|(coord, _)| coord)
    }

    /// Cells of a single row, left to right.
    ///
    /// # Panics
    ///
    /// If `row` is not below the grid height.
    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= self.height {
            panic!(
                "Cannot access row {} on grid with size {}x{}",
                row, self.width, self.height
            );
        }
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// True once every non-mine cell has been revealed.
    pub fn all_safe_revealed(&self) -> bool {
        self.total_revealed + self.total_mines == self.cells.len()
    }

    /// Mark a cell revealed, clearing any flag. Returns `false` if it was
    /// already revealed.
    pub(crate) fn set_revealed(&mut self, coord: Coordinate) -> bool {
        let cell = &mut self[coord];
        if cell.is_revealed {
            return false;
        }
        cell.is_revealed = true;
        cell.is_flagged = false;
        self.total_revealed += 1;
        true
    }

    /// Flip the flag on a hidden cell, returning the new flag state.
    pub(crate) fn toggle_flag(&mut self, coord: Coordinate) -> Result<bool, GridError> {
        let cell = self.get_mut(coord).ok_or(GridError::OutOfBounds(coord))?;
        if cell.is_revealed {
            return Err(GridError::AlreadyRevealed(coord));
        }
        cell.is_flagged = !cell.is_flagged;
        Ok(cell.is_flagged)
    }
}

impl Index<Coordinate> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        self.get(coord).unwrap_or_else(|| {
            panic!(
                "Cannot access position {} on grid with size {}x{}",
                coord, self.width, self.height
            )
        })
    }
}

impl core::ops::IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Cell {
        let (width, height) = (self.width, self.height);
        self.get_mut(coord).unwrap_or_else(|| {
            panic!(
                "Cannot mut-access position {} on grid with size {}x{}",
                coord, width, height
            )
        })
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{ {}x{}, mines: {}, revealed: {} }}",
            self.width, self.height, self.total_mines, self.total_revealed
        )?;
        for row in 0..self.height {
            for cell in self.row(row) {
                let ch = if cell.has_mine {
                    '*'
                } else {
                    (b'0' + cell.adjacent_mines) as char
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
