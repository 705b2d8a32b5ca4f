//! Simulation performance metrics.
//!
//! Computes per-process timing metrics and their means from the
//! finalized process list.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{CompletedProcess, ProcessId, Tick};

/// Timing metrics for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub id: ProcessId,
    pub arrival: Tick,
    pub burst: Tick,
    pub start: Tick,
    pub completion: Tick,
    pub turnaround: Tick,
    pub waiting: Tick,
    pub response: Tick,
}

impl From<&CompletedProcess> for ProcessMetrics {
    fn from(p: &CompletedProcess) -> Self {
        Self {
            id: p.id,
            arrival: p.arrival,
            burst: p.burst,
            start: p.start,
            completion: p.completion,
            turnaround: p.turnaround(),
            waiting: p.waiting(),
            response: p.response(),
        }
    }
}

/// Per-process metrics plus their arithmetic means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// One entry per process, in input order.
    pub processes: Vec<ProcessMetrics>,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
}

impl SimulationMetrics {
    /// Computes metrics from completed processes.
    ///
    /// Averages are 0.0 for an empty list.
    pub fn calculate(processes: &[CompletedProcess]) -> Self {
        let metrics: Vec<ProcessMetrics> = processes.iter().map(ProcessMetrics::from).collect();

        let mut total_turnaround: i64 = 0;
        let mut total_waiting: i64 = 0;
        let mut total_response: i64 = 0;
        for m in &metrics {
            total_turnaround += m.turnaround;
            total_waiting += m.waiting;
            total_response += m.response;
        }

        let count = metrics.len();
        let mean = |total: i64| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        Self {
            avg_turnaround: mean(total_turnaround),
            avg_waiting: mean(total_waiting),
            avg_response: mean(total_response),
            processes: metrics,
        }
    }

    /// Latest completion time across all processes.
    pub fn makespan(&self) -> Tick {
        self.processes.iter().map(|m| m.completion).max().unwrap_or(0)
    }

    /// Metrics for a given process.
    pub fn process(&self, id: ProcessId) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.id == id)
    }

    /// Fraction of `[0, makespan)` the CPU spent busy.
    pub fn cpu_utilization(&self) -> f64 {
        let makespan = self.makespan();
        if makespan <= 0 {
            return 0.0;
        }
        let busy: Tick = self.processes.iter().map(|m| m.burst).sum();
        busy as f64 / makespan as f64
    }

    /// Completed processes per time unit over the makespan.
    pub fn throughput(&self) -> f64 {
        let makespan = self.makespan();
        if makespan <= 0 {
            return 0.0;
        }
        self.processes.len() as f64 / makespan as f64
    }
}
