use crate::todo::task::{Priority, Task};
use chrono::NaiveDate;
use std::collections::HashMap;

/// The in-memory task collection
///
/// `Vec` is the primary storage: it preserves insertion order, which is what
/// day groups render in and what keeps the serialized TOML stable between
/// writes. The whole collection is small (personal to-do scale), so linear
/// scans for mutation are fine.
#[derive(Debug)]
pub struct TaskList {
    /// All tasks in insertion order
    pub(crate) tasks: Vec<Task>,

    /// id -> completed index, kept in sync with the Vec by every mutating
    /// operation. Backs the O(1) existence checks in `toggle`/`delete` and
    /// duplicate-id detection when loading a blob. Not serialized; rebuilt
    /// from `tasks` on deserialization.
    pub(crate) task_map: HashMap<String, bool>,

    /// Counter for generating unique task IDs. Persisted so ids stay unique
    /// across sessions even after deletes.
    pub(crate) task_counter: u64,
}

impl Default for TaskList {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            task_map: HashMap::new(),
            task_counter: 0,
        }
    }
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TaskList {
    /// Create a new empty TaskList
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique task ID
    fn generate_task_id(&mut self) -> String {
        self.task_counter += 1;
        format!("t-{}", self.task_counter)
    }

    /// All tasks, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Find a task by its ID
    pub fn find_by_id(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Add a new task to the end of the collection
    ///
    /// The text is trimmed; if nothing remains the add is a silent no-op and
    /// `None` is returned. Otherwise the task gets a fresh id, starts
    /// incomplete, and a clone of the stored task is returned.
    ///
    /// # Arguments
    /// * `text` - Task description (trimmed before storing)
    /// * `priority` - Task priority
    /// * `due_date` - Calendar date the task is due
    /// * `today` - Current date, recorded as `created_at`
    pub fn add(
        &mut self,
        text: &str,
        priority: Priority,
        due_date: NaiveDate,
        today: NaiveDate,
    ) -> Option<Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task {
            id: self.generate_task_id(),
            text: text.to_string(),
            completed: false,
            priority,
            due_date,
            created_at: today,
        };

        self.task_map.insert(task.id.clone(), task.completed);
        self.tasks.push(task.clone());
        Some(task)
    }

    /// Flip the completed flag on the task with the given ID
    ///
    /// # Returns
    /// The new completed state, or `None` if no task has that id (a no-op,
    /// not an error).
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        // O(1) absence check before scanning the Vec
        if !self.task_map.contains_key(id) {
            return None;
        }
        if let Some(task) = self.find_by_id_mut(id) {
            task.completed = !task.completed;
            let completed = task.completed;
            self.task_map.insert(id.to_string(), completed);
            Some(completed)
        } else {
            None
        }
    }

    /// Remove the task with the given ID and return it
    ///
    /// Absent ids are a no-op returning `None`.
    pub fn delete(&mut self, id: &str) -> Option<Task> {
        if !self.task_map.contains_key(id) {
            return None;
        }
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            let task = self.tasks.remove(pos);
            self.task_map.remove(id);
            Some(task)
        } else {
            None
        }
    }
}
