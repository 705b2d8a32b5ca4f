//! Preemptive Shortest-Remaining-Time-First CPU scheduling simulator.
//!
//! Simulates a single CPU over discrete time units, always running the
//! arrived process with the least remaining burst, and reports the
//! execution timeline and per-process timing metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessState`, `ProcessSpec`,
//!   `CompletedProcess`, `Slot`, `Timeline`
//! - **`scheduler`**: The SRTF tick engine and metrics aggregation
//! - **`gantt`**: Run-length encoding of the timeline and ASCII rendering
//! - **`validation`**: Input checks (process count, arrival, burst)
//! - **`simulation`**: One-call pipeline from raw input to report
//! - **`report`**: Text tables for traces and results
//! - **`workload`**: Seeded random workloads
//! - **`interactive`**: Prompt-driven restart/exit loop
//!
//! # Example
//!
//! ```
//! use u_srtf::simulation::{run, SimulationRequest};
//! use u_srtf::models::Slot;
//!
//! let request = SimulationRequest::new(Vec::new())
//!     .with_process(0, 5)
//!     .with_process(1, 3);
//! let report = run(&request).unwrap();
//!
//! // P2 preempts P1 at t=1 and finishes first.
//! assert_eq!(report.timeline[1], Slot::Busy(2));
//! assert_eq!(report.metrics.process(2).unwrap().completion, 4);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Schrage (1968), "A Proof of the Optimality of the Shortest Remaining
//!   Processing Time Discipline"

pub mod config;
pub mod error;
pub mod gantt;
pub mod interactive;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use error::SimulationError;
pub use simulation::{run, SimulationReport, SimulationRequest};
