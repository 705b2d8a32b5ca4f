//! Run-length encoding of a timeline into Gantt segments.

use serde::{Deserialize, Serialize};

use crate::models::{Slot, Tick};

/// A maximal run of identical slots covering `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub slot: Slot,
    pub start: Tick,
    pub end: Tick,
}

impl Segment {
    pub fn new(slot: Slot, start: Tick, end: Tick) -> Self {
        debug_assert!(end > start, "segment [{start}, {end}) is empty");
        Self { slot, start, end }
    }

    /// Length of the run in time units.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

/// Compresses a per-unit slot sequence into maximal segments.
///
/// The result partitions `[0, slots.len())` with no gaps or overlaps, and
/// no two adjacent segments carry the same slot. An empty input yields no
/// segments.
pub fn encode_segments(slots: &[Slot]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let Some((&first, rest)) = slots.split_first() else {
        return segments;
    };

    let mut current = first;
    let mut start: Tick = 0;

    for (offset, &slot) in rest.iter().enumerate() {
        if slot != current {
            let t = offset as Tick + 1;
            segments.push(Segment::new(current, start, t));
            current = slot;
            start = t;
        }
    }

    segments.push(Segment::new(current, start, slots.len() as Tick));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn busy(ids: &[usize]) -> Vec<Slot> {
        ids.iter()
            .map(|&id| if id == 0 { Slot::Idle } else { Slot::Busy(id) })
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(encode_segments(&[]).is_empty());
    }

    #[test]
    fn test_single_run() {
        let segs = encode_segments(&busy(&[1, 1, 1, 1, 1]));
        assert_eq!(segs, vec![Segment::new(Slot::Busy(1), 0, 5)]);
        assert_eq!(segs[0].duration(), 5);
    }

    #[test]
    fn test_preemption_pattern() {
        let segs = encode_segments(&busy(&[1, 2, 2, 2, 1, 1, 1, 1]));
        assert_eq!(
            segs,
            vec![
                Segment::new(Slot::Busy(1), 0, 1),
                Segment::new(Slot::Busy(2), 1, 4),
                Segment::new(Slot::Busy(1), 4, 8),
            ]
        );
    }

    #[test]
    fn test_idle_runs() {
        let segs = encode_segments(&busy(&[0, 0, 3, 3, 0, 2]));
        assert_eq!(
            segs,
            vec![
                Segment::new(Slot::Idle, 0, 2),
                Segment::new(Slot::Busy(3), 2, 4),
                Segment::new(Slot::Idle, 4, 5),
                Segment::new(Slot::Busy(2), 5, 6),
            ]
        );
    }

    #[test]
    fn test_alternating_units() {
        let segs = encode_segments(&busy(&[1, 2, 1, 2]));
        assert_eq!(segs.len(), 4);
        assert!(segs.iter().all(|s| s.duration() == 1));
    }

    fn slot_strategy() -> impl Strategy<Value = Slot> {
        prop_oneof![Just(Slot::Idle), (1usize..4).prop_map(Slot::Busy)]
    }

    proptest! {
        #[test]
        fn prop_segments_partition_timeline(slots in prop::collection::vec(slot_strategy(), 0..64)) {
            let segs = encode_segments(&slots);

            let mut cursor: Tick = 0;
            for seg in &segs {
                prop_assert_eq!(seg.start, cursor);
                prop_assert!(seg.end > seg.start);
                for t in seg.start..seg.end {
                    prop_assert_eq!(slots[t as usize], seg.slot);
                }
                cursor = seg.end;
            }
            prop_assert_eq!(cursor, slots.len() as Tick);
        }

        #[test]
        fn prop_adjacent_segments_differ(slots in prop::collection::vec(slot_strategy(), 1..64)) {
            let segs = encode_segments(&slots);
            for pair in segs.windows(2) {
                prop_assert_ne!(pair[0].slot, pair[1].slot);
            }
        }

        #[test]
        fn prop_encoding_is_deterministic(slots in prop::collection::vec(slot_strategy(), 0..64)) {
            prop_assert_eq!(encode_segments(&slots), encode_segments(&slots));
        }
    }
}
