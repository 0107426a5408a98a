//! Request and response types for a single day's plan.
//!
//! All times are minutes from 00:00 of the target day. The types here carry
//! no invariants of their own beyond what serde enforces; per-field limits
//! live in [`crate::validation`] and the cross-block overlap check lives in
//! the engine.

use serde::{Deserialize, Serialize};

use crate::timeline::MINUTES_PER_DAY;

/// Buffer applied when a request does not specify one.
pub const DEFAULT_TRANSITION_BUFFER_MINUTES: u32 = 15;

fn default_transition_buffer() -> u32 {
    DEFAULT_TRANSITION_BUFFER_MINUTES
}

/// Non-negotiable interval of the day (meeting, commute, lunch...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixedBlock {
    pub id: String,
    pub title: String,
    pub start_minute: u32,
    pub end_minute: u32,
}

impl FixedBlock {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_minute: u32,
        end_minute: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_minute,
            end_minute,
        }
    }
}

/// Schedulable activity with optimization metadata.
///
/// `priority` is 1 (most urgent) to 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlexibleTask {
    pub id: String,
    pub title: String,
    pub duration_minutes: u32,
    pub priority: u8,
    pub category: String,
}

impl FlexibleTask {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        duration_minutes: u32,
        priority: u8,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_minutes,
            priority,
            category: category.into(),
        }
    }
}

/// A flexible task bound to a concrete start and end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduledTask {
    pub id: String,
    pub title: String,
    pub category: String,
    pub priority: u8,
    pub start_minute: u32,
    pub end_minute: u32,
}

impl ScheduledTask {
    /// Bind `task` to start at `start_minute`.
    pub fn place(task: &FlexibleTask, start_minute: u32) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            category: task.category.clone(),
            priority: task.priority,
            start_minute,
            end_minute: start_minute + task.duration_minutes,
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }
}

/// Input of [`crate::OptimizationEngine::build_day_timeline`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DayScheduleRequest {
    #[serde(default)]
    pub fixed_blocks: Vec<FixedBlock>,
    #[serde(default)]
    pub flexible_tasks: Vec<FlexibleTask>,
    #[serde(default = "default_transition_buffer")]
    pub transition_buffer_minutes: u32,
}

impl Default for DayScheduleRequest {
    fn default() -> Self {
        Self {
            fixed_blocks: Vec::new(),
            flexible_tasks: Vec::new(),
            transition_buffer_minutes: DEFAULT_TRANSITION_BUFFER_MINUTES,
        }
    }
}

impl DayScheduleRequest {
    /// Decode a request document. Missing lists default to empty and a
    /// missing buffer defaults to [`DEFAULT_TRANSITION_BUFFER_MINUTES`].
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, wrong field types or unknown
    /// fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_buffer(mut self, minutes: u32) -> Self {
        self.transition_buffer_minutes = minutes;
        self
    }
}

/// Discriminates the three kinds of timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    Fixed,
    Task,
    Free,
}

impl SlotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Task => "task",
            Self::Free => "free",
        }
    }
}

impl std::fmt::Display for SlotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// One entry of the day partition.
///
/// `category` and `priority` are only set on [`SlotType::Task`] slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineSlot {
    pub slot_type: SlotType,
    pub id: String,
    pub title: String,
    pub start_minute: u32,
    pub end_minute: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

impl TimelineSlot {
    pub fn fixed(block: &FixedBlock) -> Self {
        Self {
            slot_type: SlotType::Fixed,
            id: block.id.clone(),
            title: block.title.clone(),
            start_minute: block.start_minute,
            end_minute: block.end_minute,
            category: None,
            priority: None,
        }
    }

    pub fn task(task: &ScheduledTask) -> Self {
        Self {
            slot_type: SlotType::Task,
            id: task.id.clone(),
            title: task.title.clone(),
            start_minute: task.start_minute,
            end_minute: task.end_minute,
            category: Some(task.category.clone()),
            priority: Some(task.priority),
        }
    }

    /// Synthetic free slot. The id is derived from the bounds so repeated
    /// runs produce identical output.
    pub fn free(start_minute: u32, end_minute: u32) -> Self {
        Self {
            slot_type: SlotType::Free,
            id: format!("free-{start_minute}-{end_minute}"),
            title: "Free".to_string(),
            start_minute,
            end_minute,
            category: None,
            priority: None,
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }
}

/// Output of [`crate::OptimizationEngine::build_day_timeline`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineResponse {
    pub day_start_minute: u32,
    pub day_end_minute: u32,
    pub transition_buffer_minutes: u32,
    pub timeline: Vec<TimelineSlot>,
    /// Sorted by `start_minute`.
    pub scheduled_tasks: Vec<ScheduledTask>,
    /// In the order the greedy pass rejected them.
    pub unscheduled_tasks: Vec<FlexibleTask>,
}

impl TimelineResponse {
    pub fn new(
        transition_buffer_minutes: u32,
        timeline: Vec<TimelineSlot>,
        scheduled_tasks: Vec<ScheduledTask>,
        unscheduled_tasks: Vec<FlexibleTask>,
    ) -> Self {
        Self {
            day_start_minute: 0,
            day_end_minute: MINUTES_PER_DAY,
            transition_buffer_minutes,
            timeline,
            scheduled_tasks,
            unscheduled_tasks,
        }
    }

    /// Total minutes covered by slots of `slot_type`.
    pub fn minutes_of(&self, slot_type: SlotType) -> u32 {
        self.timeline
            .iter()
            .filter(|slot| slot.slot_type == slot_type)
            .map(TimelineSlot::duration_minutes)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_apply_to_missing_fields() {
        let request = DayScheduleRequest::from_json("{}").unwrap();
        assert!(request.fixed_blocks.is_empty());
        assert!(request.flexible_tasks.is_empty());
        assert_eq!(request.transition_buffer_minutes, 15);
    }

    #[test]
    fn request_rejects_unknown_fields() {
        let err = DayScheduleRequest::from_json(r#"{"fixed_blocks": [], "timezone": "UTC"}"#);
        assert!(err.is_err());

        let nested = r#"{"fixed_blocks": [{"id": "a", "title": "A", "start_minute": 0, "end_minute": 10, "color": "red"}]}"#;
        assert!(DayScheduleRequest::from_json(nested).is_err());
    }

    #[test]
    fn request_rejects_negative_minutes() {
        let json = r#"{"fixed_blocks": [{"id": "a", "title": "A", "start_minute": -5, "end_minute": 10}]}"#;
        assert!(DayScheduleRequest::from_json(json).is_err());
    }

    #[test]
    fn slot_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SlotType::Fixed).unwrap(), "\"fixed\"");
        assert_eq!(serde_json::to_string(&SlotType::Task).unwrap(), "\"task\"");
        assert_eq!(serde_json::to_string(&SlotType::Free).unwrap(), "\"free\"");
    }

    #[test]
    fn non_task_slots_omit_task_metadata() {
        let json = serde_json::to_value(TimelineSlot::free(0, 60)).unwrap();
        assert_eq!(json["id"], "free-0-60");
        assert_eq!(json["title"], "Free");
        assert!(json.get("category").is_none());
        assert!(json.get("priority").is_none());

        let task = ScheduledTask::place(&FlexibleTask::new("t", "Write", 30, 2, "work"), 60);
        let json = serde_json::to_value(TimelineSlot::task(&task)).unwrap();
        assert_eq!(json["category"], "work");
        assert_eq!(json["priority"], 2);
    }

    #[test]
    fn placed_task_keeps_duration() {
        let task = FlexibleTask::new("t", "Write", 45, 1, "work");
        let placed = ScheduledTask::place(&task, 100);
        assert_eq!(placed.start_minute, 100);
        assert_eq!(placed.end_minute, 145);
        assert_eq!(placed.duration_minutes(), task.duration_minutes);
    }

    #[test]
    fn response_carries_day_bounds() {
        let timeline = vec![TimelineSlot::free(0, MINUTES_PER_DAY)];
        let response = TimelineResponse::new(15, timeline, vec![], vec![]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["day_start_minute"], 0);
        assert_eq!(json["day_end_minute"], 1440);
        assert_eq!(response.minutes_of(SlotType::Free), 1440);
    }
}
