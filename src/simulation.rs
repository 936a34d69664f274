// --- File: simulation.rs ---
use crate::config::SimulationConfig;
use crate::driver::{DiagnosticSink, GenerationDriver, LogSink};
use crate::grid::Grid;
use crate::populate::populate;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub type SimRng = StdRng;

pub struct SimulationState {
    input: Grid,
    output: Grid,
    driver: GenerationDriver,
    rng: SimRng,
    config: SimulationConfig,
    total_generations: u64,
}

impl SimulationState {
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_sink(config, Box::new(LogSink))
    }

    pub fn with_sink(config: SimulationConfig, sink: Box<dyn DiagnosticSink>) -> Self {
        let driver = GenerationDriver::new(
            config.update_strategy,
            config.tile_shape,
            config.timing_window,
            sink,
        );
        let mut state = Self {
            input: Grid::new(config.grid_size),
            output: Grid::new(config.grid_size),
            driver,
            rng: Self::make_rng(config.seed),
            config,
            total_generations: 0,
        };
        state.populate_grid();
        state
    }

    fn make_rng(seed: Option<u64>) -> SimRng {
        match seed {
            Some(seed) => SimRng::seed_from_u64(seed),
            None => SimRng::from_entropy(),
        }
    }

    fn populate_grid(&mut self) {
        self.input.clear();
        self.output.clear();
        populate(
            &mut self.input,
            self.config.populate_strategy,
            self.config.tile_shape,
            &mut self.rng,
        );
        log::debug!(
            "Populated {}x{} grid with {} live cells",
            self.input.size(),
            self.input.size(),
            self.input.population()
        );
    }

    pub fn update(&mut self) {
        self.driver.advance(&mut self.input, &mut self.output);
        self.total_generations += 1;
    }

    pub fn restart(&mut self) {
        log::info!("Restarting simulation...");
        self.rng = Self::make_rng(self.config.seed);
        self.driver.reset();
        self.total_generations = 0;
        self.populate_grid();
    }

    pub fn grid(&self) -> &Grid {
        &self.input
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn driver(&self) -> &GenerationDriver {
        &self.driver
    }

    pub fn population(&self) -> usize {
        self.input.population()
    }

    pub fn total_generations(&self) -> u64 {
        self.total_generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MemorySink;
    use crate::tiling::ExecutionStrategy;

    fn seeded_config(seed: u64) -> SimulationConfig {
        SimulationConfig {
            grid_size: 32,
            seed: Some(seed),
            timing_window: 5,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn starts_populated() {
        let state = SimulationState::new(seeded_config(1));
        assert_eq!(state.grid().size(), 32);
        assert!(state.population() > 0);
        assert_eq!(state.total_generations(), 0);
    }

    #[test]
    fn seeded_runs_match_across_strategies() {
        let mut parallel = SimulationState::new(seeded_config(9));
        let mut serial = SimulationState::new(SimulationConfig {
            update_strategy: ExecutionStrategy::Sequential,
            ..seeded_config(9)
        });
        assert_eq!(parallel.grid(), serial.grid());
        for _ in 0..20 {
            parallel.update();
            serial.update();
            assert_eq!(parallel.grid(), serial.grid());
        }
        assert_eq!(parallel.total_generations(), 20);
        assert_eq!(parallel.driver().generation(), 0);
    }

    #[test]
    fn huge_tile_extents_from_env_still_run() {
        let max = usize::MAX.to_string();
        let config = SimulationConfig::from_lookup(|key| match key {
            crate::config::ENV_TILE_ROWS | crate::config::ENV_TILE_COLS => Some(max.clone()),
            crate::config::ENV_SEED => Some("8".to_string()),
            _ => None,
        })
        .unwrap();
        let mut huge = SimulationState::new(config);
        let mut serial = SimulationState::new(SimulationConfig {
            update_strategy: ExecutionStrategy::Sequential,
            ..huge.config().clone()
        });
        assert!(huge.population() > 0);
        for _ in 0..5 {
            huge.update();
            serial.update();
            assert_eq!(huge.grid(), serial.grid());
        }
    }

    #[test]
    fn restart_with_seed_replays_initial_grid() {
        let sink = MemorySink::new();
        let mut state = SimulationState::with_sink(seeded_config(5), Box::new(sink.clone()));
        let initial = state.grid().clone();
        for _ in 0..3 {
            state.update();
        }
        state.restart();
        assert_eq!(state.grid(), &initial);
        assert_eq!(state.total_generations(), 0);
        assert_eq!(state.driver().generation(), 0);
        assert_eq!(sink.messages().len(), 3);
    }
}
