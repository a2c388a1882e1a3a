//! Plain-text rendering of the grid.

use alloc::string::String;
use core::fmt::Write;

use crate::grid::{Cell, Grid};

/// Character shown for a cell. Hidden cells show `?` or `F` unless
/// `reveal_all` is set.
pub fn cell_glyph(cell: &Cell, reveal_all: bool) -> char {
    if !cell.is_revealed() && !reveal_all {
        if cell.is_flagged() {
            'F'
        } else {
            '?'
        }
    } else if cell.has_mine() {
        '*'
    } else {
        (b'0' + cell.adjacent_mines()) as char
    }
}

/// Render the grid with row indices on the left and column indices below.
///
/// Columns are three characters wide once the grid passes ten columns so
/// two-digit indices stay aligned.
pub fn render_grid(grid: &Grid, reveal_all: bool) -> String {
    let cell_width = if grid.width() > 10 { 3 } else { 2 };
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "Revealed {}", grid.total_revealed());
    for row in 0..grid.height() {
        let _ = write!(out, "{:<3}", row);
        for cell in grid.row(row) {
            let _ = write!(out, "{:>w$}", cell_glyph(cell, reveal_all), w = cell_width);
        }
        out.push('\n');
    }
    out.push_str("   ");
    for col in 0..grid.width() {
        let _ = write!(out, "{:>w$}", col, w = cell_width);
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Difficulty, GameEngine};

    #[test]
    fn hidden_grid_shows_question_marks() {
        let grid = Grid::with_mines(Difficulty::Beginner, [Coordinate::new(0, 0)]).unwrap();
        let text = render_grid(&grid, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Revealed 0");
        assert_eq!(lines[1], "0   ? ? ? ? ? ? ? ? ?");
        assert_eq!(lines[10], "    0 1 2 3 4 5 6 7 8");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn reveal_all_shows_mines_and_counts() {
        let grid = Grid::with_mines(Difficulty::Beginner, [Coordinate::new(0, 0)]).unwrap();
        let text = render_grid(&grid, true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "0   * 1 0 0 0 0 0 0 0");
        assert_eq!(lines[2], "1   1 1 0 0 0 0 0 0 0");
    }

    #[test]
    fn flags_and_revealed_cells() {
        let grid = Grid::with_mines(Difficulty::Beginner, [Coordinate::new(0, 0)]).unwrap();
        let mut engine = GameEngine::from_grid(grid);
        engine.flag(Coordinate::new(0, 0)).unwrap();
        engine.reveal(Coordinate::new(0, 1)).unwrap();
        let text = render_grid(engine.grid(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Revealed 1");
        assert_eq!(lines[1], "0   F 1 ? ? ? ? ? ? ?");
    }

    #[test]
    fn wide_grid_uses_three_char_columns() {
        let grid = Grid::with_mines(Difficulty::Intermediate, []).unwrap();
        let text = render_grid(&grid, false);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("0    ?  ?"));
        assert!(lines[11].starts_with("10   ?"));
        assert!(lines[17].ends_with(" 14 15"));
        assert!(lines[17].starts_with("     0  1"));
    }
}
