// --- File: config.rs ---
use crate::constants::{
    DEFAULT_GENERATIONS, DEFAULT_GRID_SIZE, MIN_GRID_SIZE, TIMING_WINDOW_GENERATIONS,
};
use crate::tiling::{ExecutionStrategy, TileShape};
use std::fmt;
use std::str::FromStr;

// --- Environment Overrides ---
pub const ENV_GRID_SIZE: &str = "LIFE_GRID_SIZE";
pub const ENV_GENERATIONS: &str = "LIFE_GENERATIONS";
pub const ENV_SEED: &str = "LIFE_SEED";
pub const ENV_THREADS: &str = "LIFE_THREADS";
pub const ENV_TIMING_WINDOW: &str = "LIFE_TIMING_WINDOW";
pub const ENV_STRATEGY: &str = "LIFE_STRATEGY";
pub const ENV_TILE_ROWS: &str = "LIFE_TILE_ROWS";
pub const ENV_TILE_COLS: &str = "LIFE_TILE_COLS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
    GridTooSmall(usize),
    ZeroTimingWindow,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "invalid value {:?} for {}", value, key)
            }
            ConfigError::GridTooSmall(size) => write!(
                f,
                "grid size {} is too small, need at least {}",
                size, MIN_GRID_SIZE
            ),
            ConfigError::ZeroTimingWindow => write!(f, "timing window must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl FromStr for ExecutionStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "serial" | "sequential" => Ok(ExecutionStrategy::Sequential),
            "parallel" => Ok(ExecutionStrategy::Parallel),
            _ => Err(()),
        }
    }
}

// --- Simulation Config ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub grid_size: usize,
    pub generations: u64,
    pub update_strategy: ExecutionStrategy,
    pub populate_strategy: ExecutionStrategy,
    pub tile_shape: TileShape,
    pub timing_window: u64,
    // None draws a fresh seed from the OS on every (re)start.
    pub seed: Option<u64>,
    // None leaves rayon's global pool at its default size.
    pub worker_threads: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            generations: DEFAULT_GENERATIONS,
            update_strategy: ExecutionStrategy::Parallel,
            populate_strategy: ExecutionStrategy::Parallel,
            tile_shape: TileShape::default(),
            timing_window: TIMING_WINDOW_GENERATIONS,
            seed: None,
            worker_threads: None,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(size) = parse(&lookup, ENV_GRID_SIZE)? {
            config.grid_size = size;
        }
        if let Some(generations) = parse(&lookup, ENV_GENERATIONS)? {
            config.generations = generations;
        }
        if let Some(window) = parse(&lookup, ENV_TIMING_WINDOW)? {
            config.timing_window = window;
        }
        config.seed = parse(&lookup, ENV_SEED)?;
        config.worker_threads = parse::<usize, _>(&lookup, ENV_THREADS)?.filter(|&n| n > 0);
        if let Some(strategy) = parse::<ExecutionStrategy, _>(&lookup, ENV_STRATEGY)? {
            config.update_strategy = strategy;
            config.populate_strategy = strategy;
        }

        let rows = parse(&lookup, ENV_TILE_ROWS)?.unwrap_or(config.tile_shape.rows());
        let cols = parse(&lookup, ENV_TILE_COLS)?.unwrap_or(config.tile_shape.cols());
        config.tile_shape = TileShape::new(rows, cols);

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.timing_window == 0 {
            return Err(ConfigError::ZeroTimingWindow);
        }
        Ok(())
    }

    pub fn oversubscribes(&self, available: usize) -> bool {
        self.worker_threads.is_some_and(|threads| threads > available)
    }
}

fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
