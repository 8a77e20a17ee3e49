//! Per-generation metrics for the grid engine.
//!
//! [`StepMetrics`] captures population movement and timing for a single
//! generation, enabling HUD overlays and profiling without a separate
//! observation pass.

/// Counters collected while advancing one generation.
///
/// The engine returns a fresh value from each `step()` call; consumers
/// read the one from the most recent generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Generation number after the step; the initial state is generation 0.
    pub generation: u64,
    /// Live cells after the step.
    pub population: u64,
    /// Cells that changed dead to live during the step.
    pub births: u64,
    /// Cells that changed live to dead during the step.
    pub deaths: u64,
    /// Wall-clock time for the step, in microseconds.
    pub step_us: u64,
}
