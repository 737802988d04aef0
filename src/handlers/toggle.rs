//! Toggle-completion handler

use crate::TodoApp;

impl TodoApp {
    /// Handles toggle-by-id from the UI surface.
    pub fn handle_toggle(&mut self, id: &str) -> String {
        match self.toggle(id.trim()) {
            Some(true) => format!("Marked {} as done", id.trim()),
            Some(false) => format!("Marked {} as not done", id.trim()),
            None => format!("No task with id {}", id.trim()),
        }
    }
}
