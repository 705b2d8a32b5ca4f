//! ASCII Gantt chart.
//!
//! Renders segments as three rows, each indented by six spaces:
//!
//! ```text
//!       0 1   4    8
//!       |-|---|----|
//!       |P1|-P2|-P1-|
//! ```
//!
//! Widths are proportional to duration: each time unit is one column in
//! the scale and bar rows. Labels sit a third of the way into their
//! segment; labels wider than the segment push the row to the right.

use std::fmt;

use super::Segment;

const INDENT: &str = "      ";

/// Display adapter for a segment sequence.
#[derive(Debug, Clone, Copy)]
pub struct GanttChart<'a> {
    segments: &'a [Segment],
}

impl<'a> GanttChart<'a> {
    pub fn new(segments: &'a [Segment]) -> Self {
        Self { segments }
    }

    fn write_scale(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(INDENT)?;
        for seg in self.segments {
            write!(f, "{}{}", seg.start, pad(' ', seg.duration()))?;
        }
        let end = self.segments.last().map(|s| s.end).unwrap_or(0);
        writeln!(f, "{end}")
    }

    fn write_bars(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(INDENT)?;
        for seg in self.segments {
            write!(f, "|{}", pad('-', seg.duration()))?;
        }
        writeln!(f, "|")
    }

    fn write_labels(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(INDENT)?;
        for seg in self.segments {
            let label = seg.slot.to_string();
            let duration = seg.duration();
            let prefix = duration / 3;
            let suffix = duration - prefix - label.len() as i64;
            write!(f, "|{}{label}{}", pad('-', prefix), pad('-', suffix))?;
        }
        writeln!(f, "|")
    }
}

impl fmt::Display for GanttChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return Ok(());
        }
        self.write_scale(f)?;
        self.write_bars(f)?;
        self.write_labels(f)
    }
}

fn pad(c: char, width: i64) -> String {
    std::iter::repeat(c).take(width.max(0) as usize).collect()
}
