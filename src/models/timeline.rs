//! Per-unit execution timeline.
//!
//! Slot `t` records what the CPU did during `[t, t+1)`: either an idle
//! unit or one unit of a specific process. The timeline is bounded by the
//! simulation ceiling and is filled strictly left to right.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ProcessId, Tick};

/// What the CPU did during one time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// No eligible process.
    Idle,
    /// The given process ran.
    Busy(ProcessId),
}

impl Slot {
    /// The process that ran, if any.
    pub fn process(self) -> Option<ProcessId> {
        match self {
            Self::Idle => None,
            Self::Busy(id) => Some(id),
        }
    }

    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("ID"),
            Self::Busy(id) => write!(f, "P{id}"),
        }
    }
}

/// Bounded sequence of slots, one per simulated time unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    slots: Vec<Slot>,
    capacity: usize,
}

impl Timeline {
    /// Creates an empty timeline holding at most `capacity` units.
    ///
    /// `capacity` is a logical bound; storage grows as units are pushed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    /// Preallocates room for up to `additional` more units, never past
    /// the logical capacity.
    pub(crate) fn reserve(&mut self, additional: usize) {
        let room = self.capacity - self.slots.len();
        self.slots.reserve(additional.min(room));
    }

    /// Records the next unit.
    ///
    /// # Panics
    /// If the timeline is already at capacity.
    pub(crate) fn push(&mut self, slot: Slot) {
        assert!(
            self.slots.len() < self.capacity,
            "timeline capacity {} exceeded",
            self.capacity
        );
        self.slots.push(slot);
    }

    /// Number of recorded units (the makespan).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// End of the recorded range, as a time value.
    pub fn end(&self) -> Tick {
        self.slots.len() as Tick
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot at time `t`, if recorded.
    pub fn at(&self, t: Tick) -> Option<Slot> {
        usize::try_from(t).ok().and_then(|i| self.slots.get(i).copied())
    }

    /// Number of units in which some process ran.
    pub fn busy_units(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_idle()).count()
    }

    /// Number of idle units.
    pub fn idle_units(&self) -> usize {
        self.len() - self.busy_units()
    }
}
