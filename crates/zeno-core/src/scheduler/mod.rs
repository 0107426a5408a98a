//! Day planner engine.
//!
//! This module places flexible tasks into the free time of a single day:
//! - Validates that fixed blocks do not overlap
//! - Detects free gaps, honouring a transition buffer around fixed blocks
//! - Assigns tasks to gaps by priority, largest gap first
//! - Composes the complete, gap-free day timeline

mod greedy;

pub use greedy::{largest_fitting_gap, task_order, Assignment, GreedyAssigner};

use tracing::{debug, instrument};

use crate::error::ScheduleError;
use crate::schedule::{DayScheduleRequest, TimelineResponse};
use crate::timeline::{sorted_non_overlapping, GapComputer, TimelineComposer};

/// Stateless planner. Every call works on its own copies of the input, so
/// one engine can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizationEngine {
    assigner: GreedyAssigner,
    composer: TimelineComposer,
}

impl OptimizationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan one day.
    ///
    /// The request is assumed to have passed [`crate::validation`]; only the
    /// cross-block overlap rule is checked here.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Overlap`] when two fixed blocks overlap. No
    /// partial schedule is produced in that case.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            fixed = request.fixed_blocks.len(),
            tasks = request.flexible_tasks.len(),
            buffer = request.transition_buffer_minutes
        )
    )]
    pub fn build_day_timeline(
        &self,
        request: &DayScheduleRequest,
    ) -> Result<TimelineResponse, ScheduleError> {
        let fixed_blocks = sorted_non_overlapping(&request.fixed_blocks)?;

        let gaps =
            GapComputer::new(request.transition_buffer_minutes).available_gaps(&fixed_blocks);
        let free_minutes: u32 = gaps.iter().map(|g| g.duration()).sum();
        debug!(gaps = gaps.len(), free_minutes, "gaps computed");

        let Assignment {
            mut scheduled,
            unscheduled,
            ..
        } = self.assigner.assign(&gaps, &request.flexible_tasks);
        debug!(
            scheduled = scheduled.len(),
            unscheduled = unscheduled.len(),
            "tasks assigned"
        );

        let timeline = self.composer.compose(&fixed_blocks, &scheduled);
        scheduled.sort_by_key(|task| task.start_minute);

        Ok(TimelineResponse::new(
            request.transition_buffer_minutes,
            timeline,
            scheduled,
            unscheduled,
        ))
    }
}
