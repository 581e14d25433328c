use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::calendar::BirthdayCalendar;

/// A single birthday record.
///
/// `day` is range-checked (1-31) but not cross-checked against the month's
/// actual length, so February 31 is representable on the direct-insert path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday {
    /// Name of the person
    pub name: String,
    /// Month of birthday (1-12)
    pub month: u32,
    /// Day of birthday (1-31)
    pub day: u32,
    /// Year of birth (optional)
    #[serde(default)]
    pub year: Option<i32>,
    /// Custom birthday message (optional)
    #[serde(default)]
    pub message: Option<String>,
}

/// Application state shared across all handlers
pub struct Data {
    /// The calendar, behind a single lock serializing all access
    pub calendar: RwLock<BirthdayCalendar>,
}

impl Data {
    /// Create a new Data instance with an empty calendar
    pub fn new() -> Self {
        Self {
            calendar: RwLock::new(BirthdayCalendar::new()),
        }
    }
}

impl Default for Data {
    fn default() -> Self {
        Self::new()
    }
}
