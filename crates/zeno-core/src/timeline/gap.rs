//! Free-time detection around fixed blocks.
//!
//! Each fixed block is padded by the transition buffer, the padded
//! intervals are merged and the complement within the day is returned.

use tracing::trace;

use super::interval::{complement, merge_intervals, Interval};
use super::MINUTES_PER_DAY;
use crate::error::ScheduleError;
use crate::schedule::FixedBlock;

/// Sort fixed blocks by `(start_minute, end_minute)` and reject overlaps.
///
/// # Errors
///
/// Returns [`ScheduleError::Overlap`] naming the first adjacent pair (in
/// sorted order) where the later block starts before the earlier one ends.
pub fn sorted_non_overlapping(blocks: &[FixedBlock]) -> Result<Vec<FixedBlock>, ScheduleError> {
    let mut sorted = blocks.to_vec();
    sorted.sort_by(|a, b| {
        a.start_minute
            .cmp(&b.start_minute)
            .then(a.end_minute.cmp(&b.end_minute))
    });

    for pair in sorted.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        if curr.start_minute < prev.end_minute {
            return Err(ScheduleError::Overlap {
                first: prev.id.clone(),
                second: curr.id.clone(),
            });
        }
    }
    Ok(sorted)
}

/// Computes the gaps left free by a set of fixed blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct GapComputer {
    buffer_minutes: u32,
}

impl GapComputer {
    pub fn new(buffer_minutes: u32) -> Self {
        Self { buffer_minutes }
    }

    /// Gaps sorted by start, pairwise disjoint. Empty when the buffered
    /// blocks cover the whole day.
    ///
    /// `blocks` are expected to have passed [`sorted_non_overlapping`].
    /// Blocks reaching past midnight are clipped to the day; empty blocks
    /// occupy nothing.
    pub fn available_gaps(&self, blocks: &[FixedBlock]) -> Vec<Interval> {
        let buffered: Vec<Interval> = blocks
            .iter()
            .filter_map(|block| {
                Interval::new(block.start_minute, block.end_minute.min(MINUTES_PER_DAY))
            })
            .map(|interval| interval.expand(self.buffer_minutes))
            .collect();

        let occupied = merge_intervals(&buffered);
        trace!(
            blocks = blocks.len(),
            occupied = occupied.len(),
            buffer = self.buffer_minutes,
            "merged buffered fixed blocks"
        );
        complement(&occupied)
    }
}
