// --- File: lib.rs ---
pub mod config;
pub mod constants;
pub mod driver;
pub mod grid;
pub mod populate;
pub mod rules;
pub mod simulation;
pub mod tiling;

pub use config::{ConfigError, SimulationConfig};
pub use driver::{Diagnostic, DiagnosticSink, GenerationDriver, LogSink, MemorySink};
pub use grid::{Grid, GridError};
pub use populate::populate;
pub use rules::{neighbor_sum, next_state};
pub use simulation::{SimRng, SimulationState};
pub use tiling::{ExecutionStrategy, Region, Tile, TileMut, TileShape, next_generation, partition};
