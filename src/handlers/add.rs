//! Add-task handler

use crate::TodoApp;
use crate::todo::Priority;
use crate::validation;
use anyhow::Result;

impl TodoApp {
    /// Handles task submission from the UI surface.
    ///
    /// Priority defaults to medium and the due date to today (quick-add),
    /// matching the store's defaults for a bare submission. Empty text is
    /// accepted silently without changing the list.
    pub fn handle_add(
        &mut self,
        text: &str,
        priority: Option<&str>,
        due_date: Option<&str>,
    ) -> Result<String> {
        let priority = match priority {
            Some(p) => validation::parse_priority(p)?,
            None => Priority::medium,
        };
        let due_date = match due_date {
            Some(d) => validation::parse_date(d)?,
            None => self.today(),
        };

        match self.add(text, priority, due_date) {
            Some(task) => Ok(format!(
                "Added {} \"{}\" due {}",
                task.id, task.text, task.due_date
            )),
            None => Ok("Nothing added (empty task text)".to_string()),
        }
    }
}
