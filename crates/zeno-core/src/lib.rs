//! # Zeno Core Library
//!
//! This library plans a single day: it takes fixed, non-negotiable blocks
//! and flexible tasks with a priority and a duration, places as many tasks
//! as possible into the remaining free time and returns a gap-free
//! partition of the day.
//!
//! ## Architecture
//!
//! - **Timeline**: minute intervals, buffered gap detection and composition
//!   of the final day partition
//! - **Scheduler**: greedy, priority-ordered placement of tasks into the
//!   largest fitting gap
//! - **Validation**: per-field request checks that run before the engine
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`OptimizationEngine`]: entry point, [`OptimizationEngine::build_day_timeline`]
//! - [`DayScheduleRequest`] / [`TimelineResponse`]: request and response documents
//! - [`SchemaValidator`]: default [`RequestValidator`]
//! - [`Config`]: application configuration management

pub mod error;
pub mod schedule;
pub mod scheduler;
pub mod storage;
pub mod timeline;
pub mod validation;

pub use error::{ConfigError, CoreError, Result, ScheduleError};
pub use schedule::{
    DayScheduleRequest, FixedBlock, FlexibleTask, ScheduledTask, SlotType, TimelineResponse,
    TimelineSlot, DEFAULT_TRANSITION_BUFFER_MINUTES,
};
pub use scheduler::{GreedyAssigner, OptimizationEngine};
pub use storage::{Config, OutputFormat};
pub use timeline::{GapComputer, Interval, TimelineComposer, MINUTES_PER_DAY};
pub use validation::{validate_request, RequestValidator, SchemaError, SchemaValidator};

/// Validate `request` with `validator`, then plan it.
///
/// # Errors
///
/// Returns [`CoreError::ValidationFailed`] with every field violation, or
/// [`CoreError::Schedule`] when fixed blocks overlap.
pub fn plan_day<V: RequestValidator>(
    validator: &V,
    request: &DayScheduleRequest,
) -> Result<TimelineResponse> {
    validator.validate(request)?;
    Ok(OptimizationEngine::new().build_day_timeline(request)?)
}
