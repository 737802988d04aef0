//! Delete-task handler

use crate::TodoApp;

impl TodoApp {
    /// Handles delete-by-id from the UI surface.
    pub fn handle_delete(&mut self, id: &str) -> String {
        match self.delete(id.trim()) {
            Some(task) => format!("Deleted {} \"{}\"", task.id, task.text),
            None => format!("No task with id {}", id.trim()),
        }
    }
}
