//! Flood-fill reveal over zero-adjacency regions.
//! Pure over the grid: the caller applies the returned coordinates.

use alloc::collections::{BTreeSet, VecDeque};

use crate::grid::{Coordinate, Grid};

/// Compute every cell uncovered by revealing `origin`, a mine-free
/// cell with no adjacent mines.
///
/// The result holds the region of zero-adjacency cells reachable from
/// `origin` through 8-directional steps, plus the numbered cells bordering
/// it. Numbered cells end the traversal. `origin` itself, cells already
/// revealed and mined cells are never part of the result.
///
/// # Panics
///
/// If `origin` is off the grid, holds a mine, or has adjacent mines.
pub fn connected_region(grid: &Grid, origin: Coordinate) -> BTreeSet<Coordinate> {
    let cell = grid.get(origin).unwrap_or_else(|| {
        panic!(
            "Reveal origin {} is outside grid with size {}x{}",
            origin,
            grid.width(),
            grid.height()
        )
    });
    assert!(!cell.has_mine(), "Reveal origin {} holds a mine", origin);
    assert!(
        cell.adjacent_mines() == 0,
        "Reveal origin {} has {} adjacent mines",
        origin,
        cell.adjacent_mines()
    );

    let mut visited = BTreeSet::new();
    visited.insert(origin);
    let mut frontier = VecDeque::from([origin]);

    while let Some(pos) = frontier.pop_front() {
        for n in grid.neighbours(pos) {
            let cell = &grid[n];
            if cell.is_revealed() || cell.has_mine() || visited.contains(&n) {
                continue;
            }
            visited.insert(n);
            if cell.adjacent_mines() == 0 {
                frontier.push_back(n);
            }
        }
    }

    visited.remove(&origin);
    visited
}
