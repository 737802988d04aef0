//! Serialization and deserialization for TaskList
//!
//! The persisted form is the `[[task]]` array plus the id counter. The
//! `task_map` index never touches the file; it is rebuilt from the tasks on
//! every load.

use super::task::Task;
use super::task_list::TaskList;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

#[derive(Deserialize)]
struct TaskListHelper {
    #[serde(default, rename = "task")]
    tasks: Vec<Task>,
    #[serde(default)]
    task_counter: u64,
}

impl<'de> Deserialize<'de> for TaskList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let helper = TaskListHelper::deserialize(deserializer)?;

        // Rebuild the id index from the task array. A hand-edited blob could
        // carry the same id twice, which would make toggle/delete ambiguous,
        // so duplicates are rejected here.
        let mut task_map = HashMap::new();
        for task in &helper.tasks {
            if task_map.insert(task.id.clone(), task.completed).is_some() {
                return Err(D::Error::custom(format!("duplicate task id '{}'", task.id)));
            }
        }

        // A blob written without a counter (or hand-edited) must not let the
        // generator reuse an existing "t-N" id, so resync against the tasks.
        let max_suffix = helper
            .tasks
            .iter()
            .filter_map(|t| t.id.strip_prefix("t-")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Ok(TaskList {
            task_counter: helper.task_counter.max(max_suffix),
            tasks: helper.tasks,
            task_map,
        })
    }
}

impl Serialize for TaskList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        // Scalar before the array of tables, so the TOML stays valid
        let mut state = serializer.serialize_struct("TaskList", 2)?;
        if self.task_counter != 0 {
            state.serialize_field("task_counter", &self.task_counter)?;
        }
        state.serialize_field("task", &self.tasks)?;
        state.end()
    }
}
