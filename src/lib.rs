//! daily-todo library
//!
//! A local, file-backed to-do list that groups tasks by due date and flags
//! items nearing their deadline.
//!
//! # Architecture
//!
//! Three layers:
//! - **Command layer**: [`TodoApp`] plus the `handlers` module - one method
//!   per user action (add, toggle, delete, list)
//! - **Domain layer**: `todo` module - the task collection, per-day grouping
//!   and deadline classification
//! - **Persistence layer**: `storage` module - single-file TOML storage with
//!   full-replace writes
//!
//! # Example
//!
//! ```no_run
//! use daily_todo::TodoApp;
//! use daily_todo::todo::{Priority, SystemClock};
//!
//! let mut app = TodoApp::new("todo.toml", Box::new(SystemClock));
//! let due = app.today();
//! app.add("Water the plants", Priority::medium, due);
//! for group in app.grouped() {
//!     println!("{}: {} task(s)", group.date, group.tasks.len());
//! }
//! ```

pub mod formatting;
mod handlers;
pub mod storage;
pub mod todo;
pub mod validation;

use chrono::NaiveDate;
use std::path::Path;
use tracing::warn;

use storage::Storage;
use todo::{Clock, DayGroup, Priority, Task, TaskList, group_by_day};

/// The application context: the task collection plus its collaborators.
///
/// Owns the tasks exclusively; the grouping and classification functions only
/// ever see read-only views. The persistence backend and clock are injected
/// at construction so tests can run against temp files and fixed dates.
///
/// Every mutating operation writes the full collection back before returning.
/// Persistence failures never escape: a corrupt or missing blob degrades to
/// an empty list at startup, and a failed write leaves the in-memory state
/// authoritative for the rest of the session. Both are logged as warnings.
pub struct TodoApp {
    tasks: TaskList,
    storage: Storage,
    clock: Box<dyn Clock>,
}

impl TodoApp {
    /// Open (or start) a task list backed by the given file.
    ///
    /// An unreadable or unparseable blob is reported and replaced by an empty
    /// in-memory list; it is not an error.
    pub fn new(storage_path: impl AsRef<Path>, clock: Box<dyn Clock>) -> Self {
        let storage = Storage::new(storage_path);
        let tasks = match storage.load() {
            Ok(list) => list,
            Err(e) => {
                warn!(error = ?e, "failed to load task list, starting empty");
                TaskList::new()
            }
        };
        Self {
            tasks,
            storage,
            clock,
        }
    }

    /// Today's date, from the injected clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Current snapshot of all tasks, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    /// The current snapshot grouped by due date, past fully-done days pruned.
    pub fn grouped(&self) -> Vec<DayGroup> {
        group_by_day(self.tasks.tasks(), self.clock.today())
    }

    /// Add a task. Empty (post-trim) text is a silent no-op returning `None`.
    pub fn add(&mut self, text: &str, priority: Priority, due_date: NaiveDate) -> Option<Task> {
        let today = self.clock.today();
        let added = self.tasks.add(text, priority, due_date, today);
        if added.is_some() {
            self.persist();
        }
        added
    }

    /// Flip completion on the task with the given id. Returns the new state,
    /// or `None` when no such task exists (a no-op, not an error).
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let toggled = self.tasks.toggle(id);
        if toggled.is_some() {
            self.persist();
        }
        toggled
    }

    /// Delete the task with the given id. Absent ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Option<Task> {
        let deleted = self.tasks.delete(id);
        if deleted.is_some() {
            self.persist();
        }
        deleted
    }

    // Write-after-every-mutation. A failed write is a warning, not an error:
    // the in-memory list stays usable for the rest of the session.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.tasks) {
            warn!(error = ?e, "failed to save task list, continuing in memory");
        }
    }
}
