/// Pure date utility functions
use chrono::NaiveDate;

/// Parse an `M/D/YY` token into a date.
///
/// Two-digit years follow chrono's `%y` pivot: 69-99 land in the 1900s,
/// 00-68 in the 2000s. Impossible dates (month 13, Feb 30) are rejected.
pub fn parse_short_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%m/%d/%y")
}

/// Format a date as `MM/DD/YYYY`
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}
