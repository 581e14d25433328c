//! In-memory birthday calendar keyed by (month, day).

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::constants::UPCOMING_SCAN_DAYS;
use crate::models::Birthday;
use crate::utils::datetime::format_calendar_date;

/// Errors returned by calendar operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("Day must be between 1 and 31, got {0}")]
    InvalidDay(u32),

    #[error("No birthdays found on that day.")]
    DayNotFound,

    #[error("No birthday found for {name} on {month}/{day}.")]
    NameNotFound { name: String, month: u32, day: u32 },

    #[error("No birthdays found in month {0}")]
    MonthNotFound(u32),
}

/// A birthday occurrence produced by the upcoming scan, annotated with the
/// concrete calendar date it falls on in the scanned year.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Scanned occurrence date, formatted `MM/DD/YYYY`
    pub date: String,
    pub message: Option<String>,
}

/// In-memory index of birthdays: month -> day -> records in insertion order.
///
/// One instance is owned by the serving layer; all access goes through a
/// single lock there.
#[derive(Debug, Default)]
pub struct BirthdayCalendar {
    months: BTreeMap<u32, BTreeMap<u32, Vec<Birthday>>>,
}

impl BirthdayCalendar {
    /// Create an empty calendar
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its (month, day) bucket, creating buckets lazily.
    ///
    /// Range bounds are re-asserted here even though the HTTP layer checks
    /// them first. Day is not validated against month length.
    pub fn insert(&mut self, birthday: Birthday) -> Result<(), CalendarError> {
        if !(1..=12).contains(&birthday.month) {
            return Err(CalendarError::InvalidMonth(birthday.month));
        }
        if !(1..=31).contains(&birthday.day) {
            return Err(CalendarError::InvalidDay(birthday.day));
        }

        self.months
            .entry(birthday.month)
            .or_default()
            .entry(birthday.day)
            .or_default()
            .push(birthday);
        Ok(())
    }

    /// Remove the first record matching `name` (exact, case-sensitive) from
    /// the (month, day) bucket and return a confirmation message.
    ///
    /// The bucket itself is kept even when the removal leaves it empty.
    pub fn remove(&mut self, name: &str, month: u32, day: u32) -> Result<String, CalendarError> {
        let bucket = self
            .months
            .get_mut(&month)
            .and_then(|days| days.get_mut(&day))
            .filter(|bucket| !bucket.is_empty())
            .ok_or(CalendarError::DayNotFound)?;

        match bucket.iter().position(|b| b.name == name) {
            Some(index) => {
                bucket.remove(index);
                Ok(format!("Birthday of {name} on {month}/{day} deleted."))
            }
            None => Err(CalendarError::NameNotFound {
                name: name.to_string(),
                month,
                day,
            }),
        }
    }

    /// Records for a (month, day) pair. Absent and empty buckets both come
    /// back as `None`.
    pub fn day(&self, month: u32, day: u32) -> Option<&[Birthday]> {
        self.months
            .get(&month)
            .and_then(|days| days.get(&day))
            .filter(|bucket| !bucket.is_empty())
            .map(|bucket| bucket.as_slice())
    }

    /// The full day-to-records map for a month.
    ///
    /// Fails only when the month key itself is absent; a month holding only
    /// buckets emptied by deletions still succeeds.
    pub fn month(&self, month: u32) -> Result<&BTreeMap<u32, Vec<Birthday>>, CalendarError> {
        self.months
            .get(&month)
            .ok_or(CalendarError::MonthNotFound(month))
    }

    /// Walk up to [`UPCOMING_SCAN_DAYS`] consecutive days starting at `today`
    /// and collect every birthday encountered, annotated with the scanned
    /// date. Stops once `limit` entries have accumulated, but only after
    /// finishing the day that crossed the threshold, so the result may
    /// exceed `limit`.
    pub fn upcoming(&self, today: NaiveDate, limit: usize) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();
        for offset in 0..UPCOMING_SCAN_DAYS {
            let Some(current) = today.checked_add_days(Days::new(offset)) else {
                break;
            };
            if let Some(bucket) = self.day(current.month(), current.day()) {
                for birthday in bucket {
                    upcoming.push(UpcomingBirthday {
                        name: birthday.name.clone(),
                        date: format_calendar_date(current),
                        message: birthday.message.clone(),
                    });
                }
            }
            if upcoming.len() >= limit {
                break;
            }
        }
        upcoming
    }
}
