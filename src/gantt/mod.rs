//! Gantt timeline encoding and rendering.
//!
//! The scheduler produces one slot per time unit. This module compresses
//! that sequence into maximal segments and renders them as an ASCII
//! chart.
//!
//! # Reference
//! Clark (1922), "The Gantt Chart: A Working Tool of Management"

mod chart;
mod encoder;

pub use chart::GanttChart;
pub use encoder::{encode_segments, Segment};
