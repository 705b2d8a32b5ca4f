//! Preemptive Shortest-Remaining-Time-First scheduler.
//!
//! # Algorithm
//!
//! For each time unit `t`, starting at 0:
//! 1. Admit every `New` process whose arrival is `<= t`.
//! 2. Among eligible processes (Ready/Running, remaining > 0, arrived),
//!    pick the one with the least remaining burst. Ties go to the
//!    earliest process in input order.
//! 3. With no eligible process the unit is idle.
//! 4. Otherwise run the pick for one unit; the previous runner, if
//!    different, is preempted back to Ready.
//! 5. A process whose remaining burst reaches 0 completes at `t + 1`.
//!
//! The loop stops when every process is complete or when `t` reaches the
//! configured ceiling. Hitting the ceiling with unfinished work is an
//! [`SimulationError::Overrun`].
//!
//! # Complexity
//! O(T * n) where T = simulated units, n = processes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, trace, warn};

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::models::{CompletedProcess, Process, ProcessId, ProcessState, Slot, Tick, Timeline};

/// One observable step of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickEvent {
    /// No process was eligible during `[time, time+1)`.
    Idle { time: Tick },
    /// Process `id` ran during `[time, time+1)`, leaving `remaining` units.
    Ran {
        time: Tick,
        id: ProcessId,
        remaining: Tick,
    },
    /// Process `id` completed at `time`.
    Completed { time: Tick, id: ProcessId },
}

/// Result of a successful scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    /// Finalized processes, in input order.
    pub processes: Vec<CompletedProcess>,
    /// What ran in each unit, `[0, makespan)`.
    pub timeline: Timeline,
    /// Step-by-step trace.
    pub events: Vec<TickEvent>,
}

impl ScheduleOutcome {
    /// Time at which the last process completed.
    pub fn makespan(&self) -> Tick {
        self.timeline.end()
    }
}

/// Returns the index of the eligible process with the least remaining
/// burst at `now`.
///
/// Linear scan with a strict `<` comparison: among equal candidates the
/// first in slice order wins.
pub fn select_shortest_remaining(processes: &[Process], now: Tick) -> Option<usize> {
    let mut best: Option<(usize, Tick)> = None;

    for (index, process) in processes.iter().enumerate() {
        if !process.is_eligible(now) {
            continue;
        }
        let remaining = process.remaining();
        match best {
            Some((_, least)) if least <= remaining => {}
            _ => best = Some((index, remaining)),
        }
    }

    best.map(|(index, _)| index)
}

/// Upper bound on the makespan: all bursts back to back after the latest
/// arrival.
fn horizon_hint(processes: &[Process]) -> usize {
    let work = processes
        .iter()
        .fold(0, |acc: Tick, p| acc.saturating_add(p.burst()));
    let latest = processes.iter().map(Process::arrival).max().unwrap_or(0);
    usize::try_from(work.saturating_add(latest)).unwrap_or(0)
}

/// Single-CPU SRTF scheduler.
///
/// # Example
///
/// ```
/// use u_srtf::config::SimulationConfig;
/// use u_srtf::models::{Process, Slot};
/// use u_srtf::scheduler::SrtfScheduler;
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let outcome = SrtfScheduler::new(SimulationConfig::default())
///     .schedule(processes)
///     .unwrap();
///
/// assert_eq!(outcome.makespan(), 8);
/// assert_eq!(outcome.timeline.at(1), Some(Slot::Busy(2)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SrtfScheduler {
    config: SimulationConfig,
}

impl SrtfScheduler {
    /// Creates a scheduler bounded by `config.max_time`.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the simulation to completion.
    ///
    /// Input is assumed valid (see [`crate::validation`]). The process
    /// list is consumed; each run owns fresh state.
    pub fn schedule(&self, mut processes: Vec<Process>) -> Result<ScheduleOutcome, SimulationError> {
        let ceiling = self.config.max_time.max(0);
        let _span = debug_span!("srtf", processes = processes.len(), ceiling).entered();

        let mut timeline = Timeline::with_capacity(usize::try_from(ceiling).unwrap_or(usize::MAX));
        timeline.reserve(horizon_hint(&processes));
        let mut events = Vec::new();
        let mut running: Option<usize> = None;
        let mut now: Tick = 0;

        while now < ceiling && !processes.iter().all(Process::is_completed) {
            for process in processes.iter_mut() {
                if process.admit(now) {
                    trace!(time = now, id = process.id(), "process arrived");
                }
            }

            let Some(index) = select_shortest_remaining(&processes, now) else {
                trace!(time = now, "cpu idle");
                timeline.push(Slot::Idle);
                events.push(TickEvent::Idle { time: now });
                now += 1;
                continue;
            };

            if let Some(previous) = running.filter(|&prev| prev != index) {
                if processes[previous].state() == ProcessState::Running {
                    processes[previous].preempt();
                    debug!(
                        time = now,
                        preempted = processes[previous].id(),
                        by = processes[index].id(),
                        "preemption"
                    );
                }
            }

            let process = &mut processes[index];
            let finished = process.run_unit(now);
            let id = process.id();
            let remaining = process.remaining();

            trace!(time = now, id, remaining, "ran one unit");
            timeline.push(Slot::Busy(id));
            events.push(TickEvent::Ran {
                time: now,
                id,
                remaining,
            });
            now += 1;

            if finished {
                debug!(time = now, id, "process completed");
                events.push(TickEvent::Completed { time: now, id });
                running = None;
            } else {
                running = Some(index);
            }
        }

        let finalized: Option<Vec<CompletedProcess>> =
            processes.iter().map(Process::finalize).collect();

        match finalized {
            Some(completed) => Ok(ScheduleOutcome {
                processes: completed,
                timeline,
                events,
            }),
            None => {
                let incomplete: Vec<ProcessId> = processes
                    .iter()
                    .filter(|p| !p.is_completed())
                    .map(Process::id)
                    .collect();
                warn!(ceiling, unfinished = incomplete.len(), "simulation overran ceiling");
                Err(SimulationError::Overrun {
                    ceiling,
                    incomplete,
                })
            }
        }
    }
}
