use crate::constants;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// A local mood journal with calendar and analytics views
#[derive(Parser, Debug)]
#[clap(name = constants::APP_NAME, about = constants::APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Subcommand to run; defaults to the stats view when omitted
    #[clap(subcommand)]
    pub command: Option<Command>,

    /// Print verbose output
    #[clap(short, long, global = true)]
    pub verbose: bool,
}

/// The user-facing operations.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Record a mood entry (Happy, Good, Neutral, Sad, Very-Sad)
    Log {
        /// The mood to record; case-insensitive, '-' and '_' work as spaces
        mood: String,

        /// Optional free-text note attached to the entry
        #[clap(short, long)]
        note: Option<String>,

        /// Record for a specific date instead of today (format: YYYY-MM-DD or YYYYMMDD)
        #[clap(short, long)]
        date: Option<String>,
    },

    /// Show the mood calendar for a month
    Calendar {
        /// Month to show instead of the current one (format: YYYY-MM)
        #[clap(short, long)]
        month: Option<String>,
    },

    /// Show weekly statistics and the mood distribution
    Stats,

    /// List recorded entries, newest first
    List {
        /// Only show entries with this mood
        #[clap(short, long)]
        mood: Option<String>,
    },
}

/// Parse a date string in YYYY-MM-DD or YYYYMMDD format.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_COMPACT))
}

/// Parse a month string in YYYY-MM format into the first day of that month.
pub fn parse_month(month_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(&format!("{}-01", month_str), constants::DATE_FORMAT_ISO)
}
