//! SRTF scheduling engine and metrics.
//!
//! # Algorithm
//!
//! `SrtfScheduler` advances simulated time one unit at a time on a single
//! CPU, always running the arrived process with the least remaining burst.
//!
//! # Metrics
//!
//! `SimulationMetrics` derives turnaround, waiting, and response times
//! per process and their means.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Schrage (1968), "A Proof of the Optimality of the Shortest Remaining
//!   Processing Time Discipline"

mod metrics;
mod srtf;

pub use metrics::{ProcessMetrics, SimulationMetrics};
pub use srtf::{select_shortest_remaining, ScheduleOutcome, SrtfScheduler, TickEvent};
