//! Per-field validation of planning requests.
//!
//! Runs before the engine and checks everything a single field can express:
//! - Identifier, title and category lengths
//! - Minute ranges of fixed blocks and `end > start`
//! - Task durations and priorities
//! - The transition buffer range
//!
//! The engine never calls this module. Overlap between fixed blocks is a
//! cross-entity rule and is checked by the engine itself.

use std::fmt;

use crate::schedule::{DayScheduleRequest, FixedBlock, FlexibleTask};
use crate::timeline::MINUTES_PER_DAY;

pub const MAX_ID_LEN: usize = 120;
pub const MAX_TITLE_LEN: usize = 120;
pub const MAX_CATEGORY_LEN: usize = 80;
pub const MAX_TRANSITION_BUFFER_MINUTES: u32 = 120;
pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 3;

/// Validation result.
pub type ValidationResult = Result<(), Vec<SchemaError>>;

/// A single field violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    /// Path of the offending field, e.g. `flexible_tasks[1].priority`.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl SchemaError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Swappable validation layer.
pub trait RequestValidator {
    /// Returns every violation found, not just the first.
    fn validate(&self, request: &DayScheduleRequest) -> ValidationResult;
}

/// Default validator enforcing the documented field limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl RequestValidator for SchemaValidator {
    fn validate(&self, request: &DayScheduleRequest) -> ValidationResult {
        validate_request(request)
    }
}

/// Validates a request against the field limits.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &DayScheduleRequest) -> ValidationResult {
    let mut errors = Vec::new();

    for (idx, block) in request.fixed_blocks.iter().enumerate() {
        check_fixed_block(&format!("fixed_blocks[{idx}]"), block, &mut errors);
    }
    for (idx, task) in request.flexible_tasks.iter().enumerate() {
        check_task(&format!("flexible_tasks[{idx}]"), task, &mut errors);
    }
    if request.transition_buffer_minutes > MAX_TRANSITION_BUFFER_MINUTES {
        errors.push(SchemaError::new(
            "transition_buffer_minutes",
            format!("must be at most {MAX_TRANSITION_BUFFER_MINUTES}"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_text(path: &str, field: &str, value: &str, max: usize, errors: &mut Vec<SchemaError>) {
    let len = value.chars().count();
    if len == 0 {
        errors.push(SchemaError::new(format!("{path}.{field}"), "must not be empty"));
    } else if len > max {
        errors.push(SchemaError::new(
            format!("{path}.{field}"),
            format!("must be at most {max} characters (got {len})"),
        ));
    }
}

fn check_fixed_block(path: &str, block: &FixedBlock, errors: &mut Vec<SchemaError>) {
    check_text(path, "id", &block.id, MAX_ID_LEN, errors);
    check_text(path, "title", &block.title, MAX_TITLE_LEN, errors);

    if block.start_minute >= MINUTES_PER_DAY {
        errors.push(SchemaError::new(
            format!("{path}.start_minute"),
            format!("must be less than {MINUTES_PER_DAY}"),
        ));
    }
    if block.end_minute == 0 || block.end_minute > MINUTES_PER_DAY {
        errors.push(SchemaError::new(
            format!("{path}.end_minute"),
            format!("must be between 1 and {MINUTES_PER_DAY}"),
        ));
    }
    if block.end_minute <= block.start_minute {
        errors.push(SchemaError::new(
            format!("{path}.end_minute"),
            "end_minute must be greater than start_minute",
        ));
    }
}

fn check_task(path: &str, task: &FlexibleTask, errors: &mut Vec<SchemaError>) {
    check_text(path, "id", &task.id, MAX_ID_LEN, errors);
    check_text(path, "title", &task.title, MAX_TITLE_LEN, errors);
    check_text(path, "category", &task.category, MAX_CATEGORY_LEN, errors);

    if task.duration_minutes == 0 || task.duration_minutes > MINUTES_PER_DAY {
        errors.push(SchemaError::new(
            format!("{path}.duration_minutes"),
            format!("must be between 1 and {MINUTES_PER_DAY}"),
        ));
    }
    if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&task.priority) {
        errors.push(SchemaError::new(
            format!("{path}.priority"),
            format!("must be between {MIN_PRIORITY} and {MAX_PRIORITY}"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(result: ValidationResult) -> Vec<String> {
        result.unwrap_err().into_iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_request() {
        let request = DayScheduleRequest {
            fixed_blocks: vec![FixedBlock::new("gym", "Gym", 0, 1440)],
            flexible_tasks: vec![FlexibleTask::new("t", "Read", 1440, 3, "leisure")],
            transition_buffer_minutes: 120,
        };
        assert!(validate_request(&request).is_ok());
        assert!(SchemaValidator.validate(&request).is_ok());
    }

    #[test]
    fn test_block_ranges() {
        let request = DayScheduleRequest {
            fixed_blocks: vec![
                FixedBlock::new("late", "Late", 1440, 1441),
                FixedBlock::new("backwards", "Backwards", 100, 50),
            ],
            ..Default::default()
        };
        assert_eq!(
            fields(validate_request(&request)),
            vec![
                "fixed_blocks[0].start_minute",
                "fixed_blocks[0].end_minute",
                "fixed_blocks[1].end_minute",
            ]
        );
    }

    #[test]
    fn test_task_limits() {
        let request = DayScheduleRequest {
            flexible_tasks: vec![
                FlexibleTask::new("zero", "Zero", 0, 1, "x"),
                FlexibleTask::new("prio", "Prio", 10, 4, "x"),
                FlexibleTask::new("nocat", "No category", 10, 2, ""),
            ],
            ..Default::default()
        };
        assert_eq!(
            fields(validate_request(&request)),
            vec![
                "flexible_tasks[0].duration_minutes",
                "flexible_tasks[1].priority",
                "flexible_tasks[2].category",
            ]
        );
    }

    #[test]
    fn test_text_lengths_count_characters() {
        let title = "é".repeat(MAX_TITLE_LEN);
        let ok = DayScheduleRequest {
            flexible_tasks: vec![FlexibleTask::new("t", title, 10, 1, "c")],
            ..Default::default()
        };
        assert!(validate_request(&ok).is_ok());

        let bad = DayScheduleRequest {
            fixed_blocks: vec![FixedBlock::new("x".repeat(MAX_ID_LEN + 1), "", 0, 10)],
            ..Default::default()
        };
        let errors = validate_request(&bad).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("got 121"));
        assert_eq!(errors[1].to_string(), "fixed_blocks[0].title: must not be empty");
    }

    #[test]
    fn test_buffer_limit() {
        let request = DayScheduleRequest::default().with_buffer(121);
        assert_eq!(fields(validate_request(&request)), vec!["transition_buffer_minutes"]);
    }

    #[test]
    fn test_overlap_is_not_a_schema_error() {
        let request = DayScheduleRequest {
            fixed_blocks: vec![FixedBlock::new("A", "A", 0, 60), FixedBlock::new("B", "B", 30, 90)],
            ..Default::default()
        };
        assert!(validate_request(&request).is_ok());
    }
}
