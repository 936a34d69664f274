// --- File: tiling.rs ---
use crate::constants::{DEFAULT_TILE_COLS, DEFAULT_TILE_ROWS};
use crate::grid::Grid;
use crate::rules::evolve_cell;
use rayon::prelude::*;
use std::ops::Range;

// --- Regions and Tiles ---

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl Region {
    pub fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        Self { rows, cols }
    }

    pub fn full(size: usize) -> Self {
        Self::new(0..size, 0..size)
    }

    // Empty below 3x3.
    pub fn interior(size: usize) -> Self {
        let end = size.saturating_sub(1).max(1);
        Self::new(1..end, 1..end)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.cols.len()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }
}

pub type Tile = Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileShape {
    rows: usize,
    cols: usize,
}

impl TileShape {
    // Zero extents become 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl Default for TileShape {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_ROWS, DEFAULT_TILE_COLS)
    }
}

fn spans(range: Range<usize>, step: usize) -> impl Iterator<Item = Range<usize>> {
    let end = range.end;
    range
        .step_by(step)
        .map(move |start| start..start.saturating_add(step).min(end))
}

pub fn partition(region: &Region, shape: TileShape) -> Vec<Tile> {
    if region.is_empty() {
        return Vec::new();
    }
    spans(region.rows.clone(), shape.rows)
        .flat_map(|rows| {
            spans(region.cols.clone(), shape.cols).map(move |cols| Tile::new(rows.clone(), cols))
        })
        .collect()
}

// --- Mutable Tile Views ---

pub struct TileMut<'a> {
    tile: Tile,
    rows: Vec<&'a mut [u8]>,
}

impl<'a> TileMut<'a> {
    pub fn tile(&self) -> &Tile {
        &self.tile
    }

    #[inline]
    fn slot(&self, row: usize, col: usize) -> (usize, usize) {
        assert!(
            self.tile.contains(row, col),
            "cell ({}, {}) is outside tile {:?}",
            row,
            col,
            self.tile
        );
        (row - self.tile.rows.start, col - self.tile.cols.start)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        let (r, c) = self.slot(row, col);
        self.rows[r][c]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, state: u8) {
        let (r, c) = self.slot(row, col);
        self.rows[r][c] = state;
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = (usize, &mut [u8])> + '_ {
        let first = self.tile.rows.start;
        self.rows
            .iter_mut()
            .enumerate()
            .map(move |(offset, cells)| (first + offset, &mut **cells))
    }
}

/// Runs `f` on every tile of `partition(region, shape)`, in parallel.
///
/// Each call receives a disjoint mutable view of `grid`, so tiles may run in
/// any order on any worker. Row bands are split with `par_chunks_mut`, the
/// column tiles of a band are then run as their own parallel batch. Returns
/// once every tile has finished.
pub fn for_each_tile_mut<F>(grid: &mut Grid, region: &Region, shape: TileShape, f: F)
where
    F: Fn(&mut TileMut<'_>) + Sync + Send,
{
    if region.is_empty() {
        return;
    }
    let size = grid.size();
    assert!(
        region.rows.end <= size && region.cols.end <= size,
        "region {:?} exceeds {}x{} grid",
        region,
        size,
        size
    );
    let cols = region.cols.clone();
    let first_row = region.rows.start;
    // Bands never need more rows than the region has.
    let band_rows = shape.rows().min(region.rows.len());
    let cells = &mut grid.cells_mut()[region.rows.start * size..region.rows.end * size];

    cells
        .par_chunks_mut(band_rows * size)
        .enumerate()
        .for_each(|(band_index, band)| {
            let band_start = first_row + band_index * band_rows;
            let band_range = band_start..band_start + band.len() / size;

            let mut tiles: Vec<TileMut<'_>> = spans(cols.clone(), shape.cols())
                .map(|tile_cols| TileMut {
                    tile: Tile::new(band_range.clone(), tile_cols),
                    rows: Vec::with_capacity(band_range.len()),
                })
                .collect();

            for row in band.chunks_mut(size) {
                let mut rest = &mut row[cols.start..cols.end];
                for tile in tiles.iter_mut() {
                    let (head, tail) =
                        std::mem::take(&mut rest).split_at_mut(tile.tile.cols.len());
                    tile.rows.push(head);
                    rest = tail;
                }
            }

            tiles.into_par_iter().for_each(|mut tile| f(&mut tile));
        });
}

// --- Generation Kernel Scheduling ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    Sequential,
    #[default]
    Parallel,
}

impl ExecutionStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            ExecutionStrategy::Sequential => "Serial",
            ExecutionStrategy::Parallel => "Parallel",
        }
    }
}

/// Writes the next state of every interior cell of `input` into `output`.
///
/// `input` is only read and `output` is only written. Border cells of `output`
/// are left as they were. Both strategies produce the same `output`.
pub fn next_generation(
    input: &Grid,
    output: &mut Grid,
    strategy: ExecutionStrategy,
    shape: TileShape,
) {
    assert_eq!(
        input.size(),
        output.size(),
        "input and output grids must share a size"
    );
    let interior = input.interior();
    match strategy {
        ExecutionStrategy::Sequential => {
            for row in interior.rows.clone() {
                for col in interior.cols.clone() {
                    output.set(row, col, evolve_cell(input, row, col));
                }
            }
        }
        ExecutionStrategy::Parallel => {
            for_each_tile_mut(output, &interior, shape, |tile| {
                let first_col = tile.tile().cols.start;
                for (row, cells) in tile.rows_mut() {
                    for (offset, cell) in cells.iter_mut().enumerate() {
                        *cell = evolve_cell(input, row, first_col + offset);
                    }
                }
            });
        }
    }
}
