//! Grouping of tasks into per-day buckets
//!
//! Pure functions over a task slice; the caller supplies "today" from its
//! clock so results are deterministic under test.

use crate::todo::task::Task;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// One calendar date plus its tasks, in the store's insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
}

impl DayGroup {
    /// Number of completed tasks in this group (shown in the day header).
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

/// Group tasks by due date, pruning past days that are fully done.
///
/// A bucket survives when its date is today or later, OR it still holds at
/// least one incomplete task. Both conditions are deliberately OR-ed: a past
/// day with leftover work stays visible as backlog. Surviving groups are
/// ordered ascending by date; tasks inside a group keep their relative order
/// from the input.
pub fn group_by_day(tasks: &[Task], today: NaiveDate) -> Vec<DayGroup> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Task>> = BTreeMap::new();
    for task in tasks {
        buckets.entry(task.due_date).or_default().push(task.clone());
    }

    buckets
        .into_iter()
        .filter(|(date, tasks)| {
            let is_today_or_future = *date >= today;
            let has_uncompleted = tasks.iter().any(|t| !t.completed);
            is_today_or_future || has_uncompleted
        })
        .map(|(date, tasks)| DayGroup { date, tasks })
        .collect()
}
