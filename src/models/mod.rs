//! Simulation domain models.
//!
//! Provides the process state machine and the per-unit execution
//! timeline. All times are integer time units relative to t=0.
//!
//! # Domain Mappings
//!
//! | u-srtf | Operating system | Batch queue |
//! |--------|------------------|-------------|
//! | Process | Thread/Task | Job |
//! | Burst | CPU demand | Runtime |
//! | Timeline | Dispatch log | Run history |

mod process;
mod timeline;

pub use process::{CompletedProcess, Process, ProcessSpec, ProcessState};
pub use timeline::{Slot, Timeline};

/// Process identifier, assigned 1..=N in input order.
pub type ProcessId = usize;

/// A discrete simulated time unit.
pub type Tick = i64;
