//! Builds the final day partition from fixed blocks and placed tasks.

use std::cmp::Ordering;

use super::MINUTES_PER_DAY;
use crate::schedule::{FixedBlock, ScheduledTask, TimelineSlot};

/// Orders slots by `(start_minute, end_minute)`.
pub fn slot_order(a: &TimelineSlot, b: &TimelineSlot) -> Ordering {
    a.start_minute
        .cmp(&b.start_minute)
        .then(a.end_minute.cmp(&b.end_minute))
}

/// Merges occupied slots and fills every hole with a free slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineComposer;

impl TimelineComposer {
    pub fn new() -> Self {
        Self
    }

    /// Chronological slots tiling `[0, MINUTES_PER_DAY)`.
    ///
    /// Fixed blocks keep their own bounds; transition buffers never show up
    /// as slots, they end up inside the neighbouring free slots.
    pub fn compose(
        &self,
        fixed_blocks: &[FixedBlock],
        scheduled: &[ScheduledTask],
    ) -> Vec<TimelineSlot> {
        let mut occupied: Vec<TimelineSlot> = fixed_blocks
            .iter()
            .map(TimelineSlot::fixed)
            .chain(scheduled.iter().map(TimelineSlot::task))
            .collect();
        occupied.sort_by(slot_order);

        let mut timeline = Vec::with_capacity(occupied.len() * 2 + 1);
        let mut cursor = 0;
        for slot in occupied {
            if cursor < slot.start_minute {
                timeline.push(TimelineSlot::free(cursor, slot.start_minute));
            }
            cursor = cursor.max(slot.end_minute);
            timeline.push(slot);
        }

        if cursor < MINUTES_PER_DAY {
            timeline.push(TimelineSlot::free(cursor, MINUTES_PER_DAY));
        }
        timeline
    }
}
