//! User-action handlers
//!
//! One file per user action, each an impl block on [`crate::TodoApp`]. The
//! handlers parse CLI-shaped input, call exactly one store operation, and
//! return the text to display.

pub mod add;
pub mod delete;
pub mod list;
pub mod toggle;
