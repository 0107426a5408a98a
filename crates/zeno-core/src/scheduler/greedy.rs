//! Greedy largest-fit placement of flexible tasks.

use std::cmp::Ordering;

use tracing::trace;

use crate::schedule::{FlexibleTask, ScheduledTask};
use crate::timeline::Interval;

/// Placement order: priority ascending (1 first), then longer tasks first,
/// then title compared case-insensitively.
pub fn task_order(a: &FlexibleTask, b: &FlexibleTask) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then(b.duration_minutes.cmp(&a.duration_minutes))
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
}

/// Picks the gap for a task of `duration` minutes: the longest fitting one,
/// the earliest of those when several share that length.
pub fn largest_fitting_gap(gaps: &[Interval], duration: u32) -> Option<usize> {
    gaps.iter()
        .enumerate()
        .filter(|(_, gap)| gap.can_fit(duration))
        .min_by(|(_, a), (_, b)| b.duration().cmp(&a.duration()).then(a.start.cmp(&b.start)))
        .map(|(idx, _)| idx)
}

/// Result of one greedy pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    /// In placement order.
    pub scheduled: Vec<ScheduledTask>,
    /// In rejection order.
    pub unscheduled: Vec<FlexibleTask>,
    /// Gaps left over after placement.
    pub remaining_gaps: Vec<Interval>,
}

/// Places tasks one by one into a private pool of gaps.
///
/// Each placement scans the whole pool, so a pass costs
/// O(tasks × gaps). Tasks are never split across gaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAssigner;

impl GreedyAssigner {
    pub fn new() -> Self {
        Self
    }

    pub fn assign(&self, gaps: &[Interval], tasks: &[FlexibleTask]) -> Assignment {
        let mut pool = gaps.to_vec();
        let mut prioritized = tasks.to_vec();
        prioritized.sort_by(task_order);

        let mut assignment = Assignment::default();
        for task in prioritized {
            let Some(idx) = largest_fitting_gap(&pool, task.duration_minutes) else {
                trace!(task = %task.id, duration = task.duration_minutes, "no gap fits");
                assignment.unscheduled.push(task);
                continue;
            };

            let gap = pool.swap_remove(idx);
            let placed = ScheduledTask::place(&task, gap.start);
            if let Some(rest) = Interval::new(placed.end_minute, gap.end) {
                pool.push(rest);
            }
            trace!(
                task = %placed.id,
                start = placed.start_minute,
                end = placed.end_minute,
                "task placed"
            );
            assignment.scheduled.push(placed);
        }

        pool.sort_by_key(|gap| gap.start);
        assignment.remaining_gaps = pool;
        assignment
    }
}
