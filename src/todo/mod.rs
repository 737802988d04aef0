//! To-do domain models and business logic
//!
//! Split into submodules:
//! - `task`: the Task record, priorities, clock seam and deadline classifier
//! - `task_list`: the ordered task collection with its id index
//! - `grouping`: pure per-day grouping and past-day pruning
//! - `serde_impl`: serialization/deserialization for the collection

mod grouping;
mod serde_impl;
mod task;
mod task_list;

pub use grouping::{DayGroup, group_by_day};
pub use task::{Clock, Priority, SystemClock, Task, is_expiring_soon};
pub use task_list::TaskList;
