//! Constants used throughout the application.
//!
//! This module contains all constants used in the Moodlog application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

use chrono::Weekday;

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodlog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A local mood journal with calendar and analytics views";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Moodlog data directory.
pub const ENV_VAR_MOODLOG_DIR: &str = "MOODLOG_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for mood data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = "Documents/moods";

// File System Parameters
/// File name of the entry store slot inside the data directory.
pub const ENTRIES_FILE_NAME: &str = "mood_entries.json";
/// Default POSIX permissions for the data directory (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for the entry store file (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// First day of the week used by all weekly statistics.
pub const WEEK_START: Weekday = Weekday::Sun;
/// Number of days in a week.
pub const DAYS_PER_WEEK: i64 = 7;
/// Weekday header names for the calendar grid, starting from the week start.
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
/// Month display format used as the calendar heading.
pub const MONTH_HEADING_FORMAT: &str = "%B %Y";

// Logging Configuration
/// Default log level when RUST_LOG is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level applied when the --verbose flag is given.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
