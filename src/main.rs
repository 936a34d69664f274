// --- File: main.rs ---
use parallel_life::{SimulationConfig, SimulationState};
use std::time::Instant;

// --- Main Function ---
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = SimulationConfig::from_env()?;

    let cores = std::thread::available_parallelism().map_or(1, |n| n.get());
    if config.oversubscribes(cores) {
        log::warn!(
            "{} worker threads requested but only {} cores are available",
            config.worker_threads.unwrap_or_default(),
            cores
        );
    }
    if let Some(threads) = config.worker_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }
    log::info!(
        "Running {} generations on a {}x{} grid ({:?} updates, {} worker threads)",
        config.generations,
        config.grid_size,
        config.grid_size,
        config.update_strategy,
        rayon::current_num_threads()
    );

    let mut simulation_state = SimulationState::new(config);
    log::debug!("Initial grid:\n{}", simulation_state.grid());

    let run_start = Instant::now();
    let generations = simulation_state.config().generations;
    // Population summaries share the driver's timing window.
    let window = simulation_state.config().timing_window;
    for _ in 0..generations {
        simulation_state.update();
        let done = simulation_state.total_generations();
        if done % window == 0 {
            log::info!(
                "Generation {}: {} live cells",
                done,
                simulation_state.population()
            );
        }
    }

    log::debug!("Final grid:\n{}", simulation_state.grid());
    log::info!(
        "Finished {} generations in {:.3?}, {} live cells remain",
        simulation_state.total_generations(),
        run_start.elapsed(),
        simulation_state.population()
    );
    Ok(())
}
