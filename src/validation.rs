//! Input validation helpers
//!
//! Parsing for the values that arrive as strings from the CLI surface:
//! calendar dates and priorities.

use crate::todo::Priority;
use anyhow::{Result, anyhow};
use chrono::NaiveDate;

/// Parse a calendar date in YYYY-MM-DD format
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        anyhow!(
            "Invalid date '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        )
    })
}

/// Parse a priority string (low, medium, high)
pub fn parse_priority(priority_str: &str) -> Result<Priority> {
    priority_str.trim().parse::<Priority>().map_err(|e| anyhow!(e))
}
