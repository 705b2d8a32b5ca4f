//! Process model.
//!
//! A process is one schedulable unit of CPU work. It moves through
//! `New → Ready ⇄ Running → Completed`; the `Ready ⇄ Running` edge may be
//! crossed any number of times as the scheduler preempts and resumes it.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3 & 5

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ProcessId, Tick};

/// Raw, unvalidated process input: arrival and burst as typed by a user.
///
/// Signed so that negative input is representable and can be rejected
/// by [`crate::validation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Requested arrival time.
    pub arrival: Tick,
    /// Requested total service time.
    pub burst: Tick,
}

impl ProcessSpec {
    /// Creates a process spec.
    pub fn new(arrival: Tick, burst: Tick) -> Self {
        Self { arrival, burst }
    }
}

/// Lifecycle state of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessState {
    /// Created, arrival time not yet reached.
    New,
    /// Arrived and waiting for the CPU.
    Ready,
    /// Selected for the current time unit.
    Running,
    /// All burst consumed.
    Completed,
}

impl ProcessState {
    /// Whether the process may be picked by the scheduler.
    #[inline]
    pub fn is_schedulable(self) -> bool {
        matches!(self, Self::Ready | Self::Running)
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::New => "New",
            Self::Ready => "Ready",
            Self::Running => "Running",
            Self::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// A process during simulation.
///
/// `arrival` and `burst` are fixed at construction. Everything else is
/// mutated only by the scheduler, one time unit at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    id: ProcessId,
    arrival: Tick,
    burst: Tick,
    remaining: Tick,
    state: ProcessState,
    start: Option<Tick>,
    completion: Option<Tick>,
}

impl Process {
    /// Creates a process from validated input (`arrival >= 0`, `burst > 0`).
    pub fn new(id: ProcessId, arrival: Tick, burst: Tick) -> Self {
        debug_assert!(arrival >= 0, "P{id}: arrival must be non-negative");
        debug_assert!(burst > 0, "P{id}: burst must be positive");
        Self {
            id,
            arrival,
            burst,
            remaining: burst,
            state: ProcessState::New,
            start: None,
            completion: None,
        }
    }

    /// Builds process `index + 1` from a spec.
    pub fn from_spec(index: usize, spec: &ProcessSpec) -> Self {
        Self::new(index + 1, spec.arrival, spec.burst)
    }

    pub fn id(&self) -> ProcessId {
        self.id
    }

    pub fn arrival(&self) -> Tick {
        self.arrival
    }

    pub fn burst(&self) -> Tick {
        self.burst
    }

    pub fn remaining(&self) -> Tick {
        self.remaining
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// Time of first execution, once the process has run.
    pub fn start(&self) -> Option<Tick> {
        self.start
    }

    /// Time immediately after the last executed unit, once completed.
    pub fn completion(&self) -> Option<Tick> {
        self.completion
    }

    /// Response time, available once the process has started.
    pub fn response(&self) -> Option<Tick> {
        self.start.map(|start| start - self.arrival)
    }

    pub fn is_completed(&self) -> bool {
        self.state == ProcessState::Completed
    }

    /// Whether the process competes for the CPU at time `now`.
    pub fn is_eligible(&self, now: Tick) -> bool {
        self.state.is_schedulable() && self.remaining > 0 && self.arrival <= now
    }

    /// `New → Ready` once `now` reaches the arrival time.
    ///
    /// Returns `true` if the process was admitted by this call.
    pub(crate) fn admit(&mut self, now: Tick) -> bool {
        if self.state == ProcessState::New && self.arrival <= now {
            self.state = ProcessState::Ready;
            true
        } else {
            false
        }
    }

    /// `Running → Ready` when another process takes the CPU.
    pub(crate) fn preempt(&mut self) {
        debug_assert_eq!(self.state, ProcessState::Running);
        self.state = ProcessState::Ready;
    }

    /// Executes one unit starting at `now`.
    ///
    /// Records the first start, consumes one unit of burst, and completes
    /// the process at `now + 1` when nothing remains. Returns `true` when
    /// the process completed on this unit.
    ///
    /// # Panics
    /// If the process is not eligible at `now`.
    pub(crate) fn run_unit(&mut self, now: Tick) -> bool {
        assert!(
            self.is_eligible(now),
            "P{} is not eligible to run at t={now} (state {}, remaining {})",
            self.id,
            self.state,
            self.remaining
        );

        self.state = ProcessState::Running;
        if self.start.is_none() {
            self.start = Some(now);
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.state = ProcessState::Completed;
            self.completion = Some(now + 1);
            true
        } else {
            false
        }
    }

    /// Converts a completed process into its final record.
    ///
    /// Returns `None` while the process is still unfinished.
    pub fn finalize(&self) -> Option<CompletedProcess> {
        if !self.is_completed() {
            return None;
        }
        Some(CompletedProcess {
            id: self.id,
            arrival: self.arrival,
            burst: self.burst,
            start: self.start?,
            completion: self.completion?,
        })
    }
}

/// Final timing record of a process that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    pub id: ProcessId,
    pub arrival: Tick,
    pub burst: Tick,
    /// Time of first execution.
    pub start: Tick,
    /// Time immediately after the last executed unit.
    pub completion: Tick,
}

impl CompletedProcess {
    /// `start - arrival`.
    #[inline]
    pub fn response(&self) -> Tick {
        self.start - self.arrival
    }

    /// `completion - arrival`.
    #[inline]
    pub fn turnaround(&self) -> Tick {
        self.completion - self.arrival
    }

    /// `turnaround - burst`: time spent eligible but not running.
    #[inline]
    pub fn waiting(&self) -> Tick {
        self.turnaround() - self.burst
    }
}
