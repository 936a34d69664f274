// --- File: rules.rs ---
use crate::constants::{ALIVE, DEAD};
use crate::grid::Grid;

// 3x3 sum with the centre cell included, 0..=9. Only interior cells are queried.
#[inline]
pub fn neighbor_sum(grid: &Grid, row: usize, col: usize) -> u8 {
    debug_assert!(
        !grid.is_border(row, col),
        "neighbour sum requested for border cell ({}, {})",
        row,
        col
    );
    let mut sum = 0;
    for r in row - 1..=row + 1 {
        let cells = &grid.row(r)[col - 1..=col + 1];
        sum += cells[0] + cells[1] + cells[2];
    }
    sum
}

// Thresholds apply to the inclusive sum as-is.
#[inline]
pub fn next_state(state: u8, sum: u8) -> u8 {
    match (state, sum) {
        (ALIVE, k) if k < 2 => DEAD, // underpopulation
        (ALIVE, k) if k > 3 => DEAD, // overpopulation
        (DEAD, 3) => ALIVE,          // birth
        (s, _) => s,
    }
}

#[inline]
pub fn evolve_cell(input: &Grid, row: usize, col: usize) -> u8 {
    next_state(input.get(row, col), neighbor_sum(input, row, col))
}
