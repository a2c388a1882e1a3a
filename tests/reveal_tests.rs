use minesweeper::{connected_region, Coordinate, Difficulty, GameEngine, Grid};

fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn center_origin_reveals_all_neighbours() {
    let mines = [
        c(0, 0),
        c(0, 1),
        c(0, 2),
        c(0, 3),
        c(0, 4),
        c(8, 4),
        c(8, 5),
        c(8, 6),
        c(8, 7),
        c(8, 8),
    ];
    let grid = Grid::with_mines(Difficulty::Beginner, mines).unwrap();
    let origin = c(4, 4);
    assert_eq!(grid[origin].adjacent_mines(), 0);

    let region = connected_region(&grid, origin);
    for n in grid.neighbours(origin) {
        assert!(region.contains(&n), "neighbour {} not revealed", n);
    }
    assert!(mines.iter().all(|m| !region.contains(m)));
    // every safe cell is connected on this layout
    assert_eq!(region.len(), 81 - 10 - 1);
}

#[test]
fn single_corner_mine_leaves_only_the_mine() {
    let grid = Grid::with_mines(Difficulty::Beginner, [c(0, 0)]).unwrap();
    let region = connected_region(&grid, c(8, 8));
    assert_eq!(region.len(), 79);
    assert!(region.contains(&c(0, 1)));
    assert!(region.contains(&c(1, 0)));
    assert!(region.contains(&c(1, 1)));
    assert!(!region.contains(&c(0, 0)));
    assert!(!region.contains(&c(8, 8)));
}

#[test]
fn numbered_border_stops_the_flood() {
    // a wall of mines down column 4
    let mut mines: Vec<_> = (0..9).map(|row| c(row, 4)).collect();
    mines.push(c(0, 8));
    let grid = Grid::with_mines(Difficulty::Beginner, mines).unwrap();

    let region = connected_region(&grid, c(4, 0));
    assert_eq!(region.len(), 9 * 4 - 1);
    assert!(region.iter().all(|p| p.col < 4));
    for row in 0..9 {
        assert!(grid[c(row, 3)].adjacent_mines() > 0);
        assert!(region.contains(&c(row, 3)));
    }
}

#[test]
fn revealed_cells_are_skipped() {
    let grid = Grid::with_mines(Difficulty::Beginner, [c(0, 0)]).unwrap();
    let mut engine = GameEngine::from_grid(grid);
    engine.reveal(c(1, 1)).unwrap();
    engine.reveal(c(0, 1)).unwrap();

    let region = connected_region(engine.grid(), c(8, 8));
    assert!(!region.contains(&c(1, 1)));
    assert!(!region.contains(&c(0, 1)));
    assert_eq!(region.len(), 77);
}

#[test]
fn fully_revealed_surroundings_give_empty_region() {
    let grid = Grid::with_mines(Difficulty::Beginner, [c(0, 0)]).unwrap();
    let mut engine = GameEngine::from_grid(grid);
    engine.reveal(c(4, 4)).unwrap();
    assert!(connected_region(engine.grid(), c(4, 4)).is_empty());
    assert!(connected_region(engine.grid(), c(8, 8)).is_empty());
}

#[test]
fn region_does_not_mutate_grid() {
    let grid = Grid::with_mines(Difficulty::Beginner, [c(0, 0)]).unwrap();
    let before = grid.clone();
    let _ = connected_region(&grid, c(5, 5));
    assert_eq!(grid, before);
    assert_eq!(grid.total_revealed(), 0);
}

#[test]
#[should_panic(expected = "holds a mine")]
fn mined_origin_panics() {
    let grid = Grid::with_mines(Difficulty::Beginner, [c(0, 0)]).unwrap();
    connected_region(&grid, c(0, 0));
}

#[test]
#[should_panic(expected = "adjacent mines")]
fn numbered_origin_panics() {
    let grid = Grid::with_mines(Difficulty::Beginner, [c(0, 0)]).unwrap();
    connected_region(&grid, c(1, 1));
}

#[test]
#[should_panic(expected = "outside grid")]
fn out_of_bounds_origin_panics() {
    let grid = Grid::with_mines(Difficulty::Beginner, [c(0, 0)]).unwrap();
    connected_region(&grid, c(0, 9));
}
