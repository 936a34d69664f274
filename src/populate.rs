// --- File: populate.rs ---
use crate::constants::{ALIVE, ALIVE_PROBABILITY};
use crate::grid::Grid;
use crate::simulation::SimRng;
use crate::tiling::{ExecutionStrategy, Region, TileShape, for_each_tile_mut, partition};
use rand::{Rng, RngCore, SeedableRng};
use std::collections::HashMap;
use std::time::Instant;

/// Brings each cell of `grid`, border included, to life with probability one half.
/// Dead draws are not written. The parallel pass seeds one `SimRng` per tile from `rng`.
pub fn populate<R: Rng + ?Sized>(
    grid: &mut Grid,
    strategy: ExecutionStrategy,
    shape: TileShape,
    rng: &mut R,
) {
    let start = Instant::now();
    let size = grid.size();

    match strategy {
        ExecutionStrategy::Sequential => {
            for row in 0..size {
                for col in 0..size {
                    if rng.gen_bool(ALIVE_PROBABILITY) {
                        grid.set(row, col, ALIVE);
                    }
                }
            }
        }
        ExecutionStrategy::Parallel => {
            let region = Region::full(size);
            let seeds: HashMap<(usize, usize), u64> = partition(&region, shape)
                .into_iter()
                .map(|tile| ((tile.rows.start, tile.cols.start), rng.next_u64()))
                .collect();

            for_each_tile_mut(grid, &region, shape, |tile| {
                let key = (tile.tile().rows.start, tile.tile().cols.start);
                let mut tile_rng = SimRng::seed_from_u64(seeds[&key]);
                for (_, cells) in tile.rows_mut() {
                    for cell in cells.iter_mut() {
                        if tile_rng.gen_bool(ALIVE_PROBABILITY) {
                            *cell = ALIVE;
                        }
                    }
                }
            });
        }
    }

    log::info!(
        "{} initialisation took {} microseconds",
        strategy.label(),
        start.elapsed().as_micros()
    );
}
