use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Source of "today" for grouping and deadline classification.
///
/// Date comparisons are evaluated fresh on every query, not cached, so tests
/// can substitute a fixed date while production uses the local wall clock.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local-timezone wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Task priority
///
/// Uses lowercase naming to match the persisted TOML format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    low,
    medium,
    high,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::low),
            "medium" => Ok(Priority::medium),
            "high" => Ok(Priority::high),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high",
                s
            )),
        }
    }
}

impl Priority {
    /// Short display tag shown next to each task line.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::high => "high",
            Priority::medium => "medium",
            Priority::low => "low",
        }
    }
}

/// A single to-do item
///
/// Field names in the persisted format are camelCase (`dueDate`, `createdAt`)
/// for compatibility with blobs written by earlier versions of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned at creation and immutable afterwards
    pub id: String,
    /// Task description, trimmed and non-empty
    pub text: String,
    /// Whether the task is done
    pub completed: bool,
    /// Priority (low, medium, high)
    pub priority: Priority,
    /// Calendar date the task is due (no time component)
    pub due_date: NaiveDate,
    /// Calendar date the task was created
    pub created_at: NaiveDate,
}

impl Task {
    /// An incomplete task whose due date has already passed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }
}

/// Forward-looking deadline warning: true iff `due_date` is exactly one
/// calendar day after `today` (the task is due tomorrow).
///
/// This is distinct from overdue; the two can never hold at once since one
/// requires `due_date == today + 1` and the other `due_date < today`.
pub fn is_expiring_soon(due_date: NaiveDate, today: NaiveDate) -> bool {
    today
        .checked_add_days(Days::new(1))
        .is_some_and(|tomorrow| due_date == tomorrow)
}
