// --- File: constants.rs ---
// --- Global Simulation Constants ---
pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

pub const DEFAULT_GRID_SIZE: usize = 10;
pub const MIN_GRID_SIZE: usize = 3; // Anything smaller has no interior to update
pub const DEFAULT_GENERATIONS: u64 = 3_000;

// Chance a cell starts alive when the grid is populated.
pub const ALIVE_PROBABILITY: f64 = 0.5;

// Number of generations whose tick durations are summed before one timing report.
pub const TIMING_WINDOW_GENERATIONS: u64 = 1000;

// --- Tiling ---
// Tile shape is a tuning knob only; any shape yields the same generation.
// Wide tiles keep the inner column loop on contiguous memory.
pub const DEFAULT_TILE_ROWS: usize = 16;
pub const DEFAULT_TILE_COLS: usize = 64;
