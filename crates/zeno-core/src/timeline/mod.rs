//! Day timeline: interval algebra, gap detection and slot composition.
//!
//! This module provides:
//! - Half-open minute intervals with merge and complement
//! - Buffered gap detection around fixed blocks
//! - Composition of fixed and scheduled slots into a gap-free day

mod compose;
mod gap;
mod interval;

pub use compose::{slot_order, TimelineComposer};
pub use gap::{sorted_non_overlapping, GapComputer};
pub use interval::{complement, interval_order, merge_intervals, Interval};

/// Length of the planned day in minutes.
pub const MINUTES_PER_DAY: u32 = 24 * 60;
