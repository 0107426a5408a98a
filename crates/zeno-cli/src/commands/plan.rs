//! Day planning command.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use zeno_core::{
    plan_day, Config, DayScheduleRequest, OutputFormat, SchemaValidator, SlotType,
    TimelineResponse,
};

#[derive(Args)]
pub struct PlanArgs {
    /// Request JSON file (reads stdin when omitted or "-")
    file: Option<PathBuf>,
    /// Override the transition buffer in minutes
    #[arg(long)]
    buffer: Option<u32>,
    /// Print the response as JSON
    #[arg(long, conflicts_with = "table")]
    json: bool,
    /// Print a human-readable timeline
    #[arg(long)]
    table: bool,
    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let raw = read_input(args.file.as_ref())?;
    let request = parse_request(&raw, &config, args.buffer)?;
    debug!(
        fixed = request.fixed_blocks.len(),
        tasks = request.flexible_tasks.len(),
        buffer = request.transition_buffer_minutes,
        "request loaded"
    );

    let response = plan_day(&SchemaValidator, &request)?;
    info!(
        scheduled = response.scheduled_tasks.len(),
        unscheduled = response.unscheduled_tasks.len(),
        "day planned"
    );

    let format = if args.json {
        OutputFormat::Json
    } else if args.table {
        OutputFormat::Table
    } else {
        config.output.format
    };

    match format {
        OutputFormat::Json => {
            let pretty = config.output.pretty && !args.compact;
            let json = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{json}");
        }
        OutputFormat::Table => print!("{}", render_table(&response)),
    }
    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            std::fs::read_to_string(path).map_err(|e| {
                Box::<dyn std::error::Error>::from(format!("cannot read {}: {e}", path.display()))
            })
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Decode a request, filling a missing buffer from the config and
/// applying the command-line override last.
fn parse_request(
    raw: &str,
    config: &Config,
    buffer_override: Option<u32>,
) -> Result<DayScheduleRequest, Box<dyn std::error::Error>> {
    let mut value: serde_json::Value = serde_json::from_str(raw)?;
    let obj = value
        .as_object_mut()
        .ok_or("request must be a JSON object")?;

    let buffer = buffer_override.or_else(|| {
        (!obj.contains_key("transition_buffer_minutes"))
            .then_some(config.planner.default_transition_buffer_minutes)
    });
    if let Some(buffer) = buffer {
        obj.insert("transition_buffer_minutes".to_string(), buffer.into());
    }

    Ok(serde_json::from_value(value)?)
}

fn clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

fn render_table(response: &TimelineResponse) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== Day Plan (buffer {} min) ===\n\n",
        response.transition_buffer_minutes
    ));

    for slot in &response.timeline {
        let marker = match slot.slot_type {
            SlotType::Fixed => "#",
            SlotType::Task => "*",
            SlotType::Free => " ",
        };
        let mut line = format!(
            "{} {}-{}  {:<5} {}",
            marker,
            clock(slot.start_minute),
            clock(slot.end_minute),
            slot.slot_type,
            slot.title
        );
        if let (Some(category), Some(priority)) = (&slot.category, slot.priority) {
            line.push_str(&format!(" [{category}, P{priority}]"));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str(&format!(
        "\nScheduled: {} ({} min)  Free: {} min\n",
        response.scheduled_tasks.len(),
        response.minutes_of(SlotType::Task),
        response.minutes_of(SlotType::Free)
    ));

    if !response.unscheduled_tasks.is_empty() {
        out.push_str("\nUnscheduled:\n");
        for task in &response.unscheduled_tasks {
            out.push_str(&format!(
                "  - {} ({} min, P{})\n",
                task.title, task.duration_minutes, task.priority
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeno_core::OptimizationEngine;

    #[test]
    fn missing_buffer_uses_config_default() {
        let mut config = Config::default();
        config.planner.default_transition_buffer_minutes = 40;

        let request = parse_request("{}", &config, None).unwrap();
        assert_eq!(request.transition_buffer_minutes, 40);

        let explicit =
            parse_request(r#"{"transition_buffer_minutes": 5}"#, &config, None).unwrap();
        assert_eq!(explicit.transition_buffer_minutes, 5);
    }

    #[test]
    fn override_beats_request_and_config() {
        let raw = r#"{"transition_buffer_minutes": 5}"#;
        let request = parse_request(raw, &Config::default(), Some(0)).unwrap();
        assert_eq!(request.transition_buffer_minutes, 0);
    }

    #[test]
    fn non_object_input_is_rejected() {
        assert!(parse_request("[]", &Config::default(), None).is_err());
        assert!(parse_request(r#"{"unknown": 1}"#, &Config::default(), None).is_err());
    }

    #[test]
    fn clock_formats_minutes() {
        assert_eq!(clock(0), "00:00");
        assert_eq!(clock(545), "09:05");
        assert_eq!(clock(1440), "24:00");
    }

    #[test]
    fn table_lists_slots_and_leftovers() {
        let request = parse_request(
            r#"{
                "fixed_blocks": [{"id": "busy", "title": "Busy", "start_minute": 60, "end_minute": 1440}],
                "flexible_tasks": [
                    {"id": "a", "title": "Call", "duration_minutes": 30, "priority": 1, "category": "home"},
                    {"id": "b", "title": "Paint", "duration_minutes": 300, "priority": 2, "category": "home"}
                ],
                "transition_buffer_minutes": 0
            }"#,
            &Config::default(),
            None,
        )
        .unwrap();
        let response = OptimizationEngine::new().build_day_timeline(&request).unwrap();
        let table = render_table(&response);

        assert!(table.contains("* 00:00-00:30  task  Call [home, P1]"));
        assert!(table.contains("  00:30-01:00  free  Free"));
        assert!(table.contains("# 01:00-24:00  fixed Busy"));
        assert!(table.contains("Unscheduled:\n  - Paint (300 min, P2)"));
    }
}
