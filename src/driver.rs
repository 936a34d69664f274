// --- File: driver.rs ---
use crate::constants::TIMING_WINDOW_GENERATIONS;
use crate::grid::Grid;
use crate::tiling::{ExecutionStrategy, TileShape, next_generation};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

// --- Diagnostics ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    Generation,
    Timing,
}

pub trait DiagnosticSink: Send {
    fn emit(&mut self, kind: Diagnostic, message: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, kind: Diagnostic, message: &str) {
        match kind {
            Diagnostic::Generation => log::debug!("{}", message),
            Diagnostic::Timing => log::info!("{}", message),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<(Diagnostic, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Diagnostic, String)> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&mut self, kind: Diagnostic, message: &str) {
        let mut messages = match self.messages.lock() {
            Ok(messages) => messages,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.push((kind, message.to_string()));
    }
}

// --- Generation Driver ---

pub struct GenerationDriver {
    strategy: ExecutionStrategy,
    shape: TileShape,
    timing_window: u64,
    generation: u64,
    accumulated: Duration,
    sink: Box<dyn DiagnosticSink>,
}

impl GenerationDriver {
    pub fn new(
        strategy: ExecutionStrategy,
        shape: TileShape,
        timing_window: u64,
        sink: Box<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            strategy,
            shape,
            timing_window: timing_window.max(1),
            generation: 0,
            accumulated: Duration::ZERO,
            sink,
        }
    }

    /// Runs one generation of `input` into `output`, then copies it back into `input`.
    ///
    /// On return `input` holds the new generation. Border cells of `input` take
    /// whatever `output` holds there, which the kernel never writes.
    pub fn advance(&mut self, input: &mut Grid, output: &mut Grid) {
        let start = Instant::now();

        next_generation(input, output, self.strategy, self.shape);
        input.copy_from(output);
        let elapsed = start.elapsed();

        self.generation += 1;
        self.sink.emit(
            Diagnostic::Generation,
            &format!("Generation number {}", self.generation),
        );

        self.accumulated += elapsed;
        if self.generation >= self.timing_window {
            self.sink.emit(
                Diagnostic::Timing,
                &format!("{} microseconds", self.accumulated.as_micros()),
            );
            self.generation = 0;
            self.accumulated = Duration::ZERO;
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: ExecutionStrategy) {
        self.strategy = strategy;
    }

    pub fn reset(&mut self) {
        self.generation = 0;
        self.accumulated = Duration::ZERO;
    }
}

impl Default for GenerationDriver {
    fn default() -> Self {
        Self::new(
            ExecutionStrategy::default(),
            TileShape::default(),
            TIMING_WINDOW_GENERATIONS,
            Box::new(LogSink),
        )
    }
}
