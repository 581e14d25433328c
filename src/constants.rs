/// Number of entries the upcoming-birthdays scan collects before stopping
pub const UPCOMING_LIMIT: usize = 10;

/// Days covered by the upcoming-birthdays walk (a full year plus a possible leap day)
pub const UPCOMING_SCAN_DAYS: u64 = 366;

/// Default bind address for the HTTP server
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "birthday_calendar=info";
