//! List handler

use crate::TodoApp;
use crate::formatting;

impl TodoApp {
    /// Renders the grouped snapshot for display.
    ///
    /// Grouping and deadline markers are evaluated against the clock's
    /// current date on every call.
    pub fn handle_list(&self) -> String {
        let groups = self.grouped();
        formatting::format_day_groups(&groups, self.today())
    }
}
