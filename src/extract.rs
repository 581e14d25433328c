//! Birthday extraction from free-text announcements.
//!
//! Lines like "Happy birthday to Alice! 01/05/99" are matched against a
//! fixed set of trigger phrases and a short date token, filtered through a
//! caller-supplied candidate name list, and inserted into the calendar.

use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;
use tracing::warn;

use crate::calendar::BirthdayCalendar;
use crate::models::Birthday;
use crate::utils::datetime::parse_short_date;

/// Full announcement pattern: trigger phrase, name fragment, date token
static ANNOUNCEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(happy birthday(?: to | of )?|happy bday )([^!]+?)\b.*?\b(\d{1,2}/\d{1,2}/\d{2})\b")
        .expect("announcement pattern compiles")
});

/// Standalone `M/D/YY` token pattern, used by the second extraction pass
static DATE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2}/\d{1,2}/\d{2})\b").expect("date token pattern compiles"));

/// A birthday announcement detected within a single line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    /// The matched trigger phrase, with its original casing and spacing
    pub phrase: String,
    /// The trimmed name fragment
    pub name: String,
    /// The date token captured next to the phrase. Only used for message
    /// reconstruction; the date actually parsed comes from [`find_date_token`].
    pub date_token: String,
}

impl Announcement {
    /// Reconstruct the canonical message: phrase, name and date token
    /// concatenated literally, with no added separators.
    pub fn message(&self) -> String {
        format!("{}{}{}", self.phrase, self.name, self.date_token)
    }
}

/// Detect a birthday announcement in a line
pub fn find_announcement(line: &str) -> Option<Announcement> {
    let caps = ANNOUNCEMENT_RE.captures(line)?;
    Some(Announcement {
        phrase: caps[1].to_string(),
        name: caps[2].trim().to_string(),
        date_token: caps[3].trim().to_string(),
    })
}

/// Locate the first `M/D/YY` token in a line
pub fn find_date_token(line: &str) -> Option<&str> {
    DATE_TOKEN_RE.find(line).map(|m| m.as_str())
}

/// Scan `text` line by line for birthday announcements whose name appears in
/// `names` (exact, case-sensitive) and insert each parsed match into
/// `calendar`. Returns how many records were added.
///
/// A line with an unparseable date is logged and skipped; the batch never
/// aborts. The date handed to the parser comes from a second, independent
/// search of the line, not from the announcement capture, so a line carrying
/// several date-shaped tokens can store a different date than its message
/// quotes.
pub fn add_birthdays_from_text(
    text: &str,
    names: &[String],
    calendar: &mut BirthdayCalendar,
) -> usize {
    let mut added = 0;
    for line in text.lines() {
        let Some(announcement) = find_announcement(line) else {
            continue;
        };
        if !names.iter().any(|n| n == &announcement.name) {
            continue;
        }
        let Some(date_str) = find_date_token(line) else {
            continue;
        };
        let date = match parse_short_date(date_str) {
            Ok(date) => date,
            Err(e) => {
                warn!("Invalid date format: {date_str} ({e})");
                continue;
            }
        };
        let birthday = Birthday {
            name: announcement.name.clone(),
            month: date.month(),
            day: date.day(),
            year: Some(date.year()),
            message: Some(announcement.message()),
        };
        if let Err(e) = calendar.insert(birthday) {
            warn!("Skipping extracted birthday: {e}");
            continue;
        }
        added += 1;
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_announcement_basic() {
        let announcement = find_announcement("Happy birthday to Alice! 01/05/99").unwrap();
        assert_eq!(announcement.phrase, "Happy birthday to ");
        assert_eq!(announcement.name, "Alice");
        assert_eq!(announcement.date_token, "01/05/99");
        assert_eq!(announcement.message(), "Happy birthday to Alice01/05/99");
    }

    #[test]
    fn test_find_announcement_phrase_variants() {
        let bday = find_announcement("happy bday Eve 03/04/05").unwrap();
        assert_eq!(bday.phrase, "happy bday ");
        assert_eq!(bday.name, "Eve");

        let of = find_announcement("happy birthday of Frank, 05/06/07").unwrap();
        assert_eq!(of.phrase, "happy birthday of ");
        assert_eq!(of.name, "Frank");
    }

    #[test]
    fn test_find_announcement_requires_date_token() {
        assert!(find_announcement("Happy birthday to Alice!").is_none());
        assert!(find_announcement("see you on 01/05/99").is_none());
    }

    #[test]
    fn test_find_date_token_picks_first_in_line() {
        assert_eq!(find_date_token("born 01/05/99, party 02/06/99"), Some("01/05/99"));
        assert_eq!(find_date_token("no dates here"), None);
        // Four-digit years do not match the short token shape.
        assert_eq!(find_date_token("born 01/05/1999"), None);
    }

    #[test]
    fn test_add_from_text_single_match() {
        let mut calendar = BirthdayCalendar::new();
        let added = add_birthdays_from_text(
            "Happy birthday to Alice! 01/05/99",
            &names(&["Alice"]),
            &mut calendar,
        );
        assert_eq!(added, 1);

        let bucket = calendar.day(1, 5).unwrap();
        assert_eq!(bucket[0].name, "Alice");
        assert_eq!(bucket[0].month, 1);
        assert_eq!(bucket[0].day, 5);
        assert_eq!(bucket[0].year, Some(1999));
        assert_eq!(
            bucket[0].message.as_deref(),
            Some("Happy birthday to Alice01/05/99")
        );
    }

    #[test]
    fn test_add_from_text_name_not_in_candidates() {
        let mut calendar = BirthdayCalendar::new();
        let added = add_birthdays_from_text(
            "Happy birthday to Alice! 01/05/99",
            &names(&["Bob"]),
            &mut calendar,
        );
        assert_eq!(added, 0);
        assert!(calendar.day(1, 5).is_none());
    }

    #[test]
    fn test_add_from_text_name_match_is_case_sensitive() {
        let mut calendar = BirthdayCalendar::new();
        let added = add_birthdays_from_text(
            "Happy birthday to alice! 01/05/99",
            &names(&["Alice"]),
            &mut calendar,
        );
        assert_eq!(added, 0);
    }

    #[test]
    fn test_add_from_text_invalid_date_is_skipped() {
        let mut calendar = BirthdayCalendar::new();
        let added = add_birthdays_from_text(
            "Happy birthday to Carl! 13/40/99",
            &names(&["Carl"]),
            &mut calendar,
        );
        assert_eq!(added, 0);
    }

    #[test]
    fn test_add_from_text_multiple_lines() {
        let text = "Happy birthday to Alice! 01/05/99\n\
                    just another line\n\
                    happy bday Eve 03/04/05\n\
                    Happy birthday to Mallory! 02/02/88";
        let mut calendar = BirthdayCalendar::new();
        let added = add_birthdays_from_text(text, &names(&["Alice", "Eve"]), &mut calendar);
        assert_eq!(added, 2);
        assert!(calendar.day(1, 5).is_some());
        assert!(calendar.day(3, 4).is_some());
        assert!(calendar.day(2, 2).is_none());
    }

    #[test]
    fn test_add_from_text_second_pass_wins_on_multiple_dates() {
        // A date-shaped token before the phrase is found by the independent
        // date search, while the announcement capture quotes the later one.
        let line = "12/25/98 party notes. Happy birthday to Dana! 02/03/99";
        let mut calendar = BirthdayCalendar::new();
        let added = add_birthdays_from_text(line, &names(&["Dana"]), &mut calendar);
        assert_eq!(added, 1);

        let bucket = calendar.day(12, 25).unwrap();
        assert_eq!(bucket[0].month, 12);
        assert_eq!(bucket[0].day, 25);
        assert_eq!(bucket[0].year, Some(1998));
        // The stored message still quotes the date captured next to the phrase.
        assert_eq!(
            bucket[0].message.as_deref(),
            Some("Happy birthday to Dana02/03/99")
        );
    }

    #[test]
    fn test_two_digit_year_pivot() {
        let mut calendar = BirthdayCalendar::new();
        add_birthdays_from_text(
            "Happy birthday to Alice! 01/05/68\nHappy birthday to Bob! 01/06/69",
            &names(&["Alice", "Bob"]),
            &mut calendar,
        );
        assert_eq!(calendar.day(1, 5).unwrap()[0].year, Some(2068));
        assert_eq!(calendar.day(1, 6).unwrap()[0].year, Some(1969));
    }
}
