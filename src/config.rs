//! Simulation limits.
//!
//! The process table and the timeline are both bounded. The bounds are
//! carried as an explicit configuration value so each run can be sized
//! independently, with the classic limits as defaults.

use serde::{Deserialize, Serialize};

use crate::models::Tick;

/// Default maximum number of processes accepted per run.
pub const DEFAULT_MAX_PROCESSES: usize = 10;

/// Default ceiling on simulated time units per run.
pub const DEFAULT_MAX_TIME: Tick = 1000;

/// Bounds for a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Largest accepted process count (inclusive).
    pub max_processes: usize,
    /// Safety ceiling on simulated time. Reaching it with unfinished
    /// processes is reported as an overrun.
    pub max_time: Tick,
}

impl SimulationConfig {
    /// Creates a config with the default limits.
    pub fn new() -> Self {
        Self {
            max_processes: DEFAULT_MAX_PROCESSES,
            max_time: DEFAULT_MAX_TIME,
        }
    }

    /// Sets the maximum process count.
    pub fn with_max_processes(mut self, max_processes: usize) -> Self {
        self.max_processes = max_processes;
        self
    }

    /// Sets the simulated time ceiling.
    pub fn with_max_time(mut self, max_time: Tick) -> Self {
        self.max_time = max_time;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
