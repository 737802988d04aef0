//! Display formatting for day groups
//!
//! Renders the grouped snapshot as plain text for the CLI surface. Markers:
//! `[x]`/`[ ]` completion, `!` overdue, `*` due tomorrow, plus a priority tag
//! per task and a done/total count per day header.

use crate::todo::{DayGroup, is_expiring_soon};
use chrono::NaiveDate;

/// Format day groups into a display string
pub fn format_day_groups(groups: &[DayGroup], today: NaiveDate) -> String {
    if groups.is_empty() {
        return "Nothing to do - enjoy your day!".to_string();
    }

    let mut result = String::new();
    for group in groups {
        let day_tag = if group.date == today { " (today)" } else { "" };
        result.push_str(&format!(
            "{}{} - {}/{} done\n",
            group.date,
            day_tag,
            group.completed_count(),
            group.tasks.len()
        ));

        for task in &group.tasks {
            let check = if task.completed { "x" } else { " " };
            let mut markers = String::new();
            if task.is_overdue(today) {
                markers.push('!');
            }
            if is_expiring_soon(task.due_date, today) {
                markers.push('*');
            }
            if !markers.is_empty() {
                markers.push(' ');
            }

            result.push_str(&format!(
                "  [{}] {} {}{} ({})\n",
                check,
                task.id,
                markers,
                task.text,
                task.priority.label()
            ));
        }
    }

    result
}
