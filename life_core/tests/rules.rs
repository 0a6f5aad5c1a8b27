//! Generation rules checked on whole grids.

use life_core::{live_neighbors, next_generation, patterns, torus, Grid, GRID_SIZE};

fn grid_with(size: usize, live: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(size);
    for &(row, col) in live {
        grid.set(row, col, true).unwrap();
    }
    grid
}

fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
    grid.cells()
        .filter(|&(_, _, alive)| alive)
        .map(|(row, col, _)| (row, col))
        .collect()
}

fn step(grid: &Grid) -> Grid {
    next_generation(&grid.snapshot())
}

#[test]
fn empty_grid_stays_empty() {
    for size in [1, 2, 3, 4, 10, GRID_SIZE] {
        let next = step(&Grid::new(size));
        assert_eq!(next.population(), 0, "size {size}");
        assert_eq!(next.size(), size);
    }
}

#[test]
fn isolated_cell_dies() {
    let grid = grid_with(GRID_SIZE, &[(25, 25)]);
    assert_eq!(step(&grid).population(), 0);
}

#[test]
fn block_is_still_life() {
    let grid = grid_with(GRID_SIZE, &[(10, 10), (10, 11), (11, 10), (11, 11)]);
    assert_eq!(step(&grid), grid);
}

#[test]
fn block_straddling_corner_is_still_life() {
    let n = GRID_SIZE - 1;
    let grid = grid_with(GRID_SIZE, &[(n, n), (n, 0), (0, n), (0, 0)]);
    assert_eq!(step(&grid), grid);
}

#[test]
fn blinker_has_period_two() {
    let grid = grid_with(GRID_SIZE, &[(20, 19), (20, 20), (20, 21)]);

    let once = step(&grid);
    assert_ne!(once, grid);
    assert_eq!(live_cells(&once), vec![(19, 20), (20, 20), (21, 20)]);

    assert_eq!(step(&once), grid);
}

#[test]
fn blinker_across_the_seam_has_period_two() {
    let n = GRID_SIZE - 1;
    let grid = grid_with(GRID_SIZE, &[(5, n), (5, 0), (5, 1)]);
    let once = step(&grid);
    assert_eq!(live_cells(&once), vec![(4, 0), (5, 0), (6, 0)]);
    assert_eq!(step(&once), grid);
}

#[test]
fn wrap_counts_neighbors_at_every_edge_and_corner() {
    let size = GRID_SIZE;
    let n = size - 1;
    let mid = size / 2;

    // (cell, neighbour reachable only through the seam)
    let cases = [
        ((0, mid), (n, mid)),      // top edge
        ((n, mid), (0, mid)),      // bottom edge
        ((mid, 0), (mid, n)),      // left edge
        ((mid, n), (mid, 0)),      // right edge
        ((0, 0), (n, n)),          // top-left corner
        ((0, n), (n, 0)),          // top-right corner
        ((n, 0), (0, n)),          // bottom-left corner
        ((n, n), (0, 0)),          // bottom-right corner
    ];

    for ((row, col), neighbour) in cases {
        let snapshot = grid_with(size, &[(row, col), neighbour]).snapshot();
        assert_eq!(live_neighbors(&snapshot, row, col), 1, "cell ({row}, {col})");
    }
}

#[test]
fn births_happen_across_the_seam() {
    let n = GRID_SIZE - 1;
    // Three neighbours of (0, 0), all on the far side of the grid
    let grid = grid_with(GRID_SIZE, &[(n, 0), (n, 1), (0, n)]);
    assert_eq!(step(&grid).get(0, 0), Ok(true));
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_generations() {
    for origin in [(10, 10), (GRID_SIZE - 2, GRID_SIZE - 2)] {
        let shape = patterns::find("Glider").unwrap().cells;
        let place = |dr: isize| -> Vec<(usize, usize)> {
            let mut cells: Vec<_> = shape
                .iter()
                .map(|&(r, c)| {
                    (
                        torus(origin.0, r as isize + dr, GRID_SIZE),
                        torus(origin.1, c as isize + dr, GRID_SIZE),
                    )
                })
                .collect();
            cells.sort();
            cells
        };

        let mut grid = grid_with(GRID_SIZE, &place(0));
        for _ in 0..4 {
            grid = step(&grid);
        }
        assert_eq!(live_cells(&grid), place(1), "origin {origin:?}");
    }
}

#[test]
fn next_generation_leaves_its_input_untouched() {
    let mut grid = Grid::new(GRID_SIZE);
    patterns::random_fill(&mut grid, 42);
    let snapshot = grid.snapshot();
    let before = snapshot.clone();

    let next = next_generation(&snapshot);

    assert_eq!(snapshot, before);
    assert_eq!(Grid::from(snapshot), grid);
    assert_ne!(next, grid);
}

#[test]
fn updates_read_the_previous_generation_only() {
    // An L-tromino becomes a block; in-place updates would smear it
    let grid = grid_with(6, &[(1, 1), (1, 2), (2, 1)]);
    let next = step(&grid);
    assert_eq!(live_cells(&next), vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
}

#[test]
fn toggle_pair_is_self_inverse() {
    let mut grid = Grid::new(GRID_SIZE);
    patterns::random_fill(&mut grid, 3);
    let original = grid.clone();
    for (row, col) in [(0, 0), (50, 50), (17, 33)] {
        grid.toggle(row, col).unwrap();
        assert_ne!(grid, original);
        grid.toggle(row, col).unwrap();
        assert_eq!(grid, original);
    }
}

#[test]
fn pulsar_has_period_three() {
    let mut grid = Grid::new(GRID_SIZE);
    patterns::stamp(&mut grid, patterns::find("Pulsar").unwrap());
    let start = grid.clone();
    for _ in 0..3 {
        grid = step(&grid);
    }
    assert_eq!(grid, start);
}
