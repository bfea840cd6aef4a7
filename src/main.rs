/*!
# Moodlog - A Local Mood Journal

Moodlog is a command-line tool for tracking daily moods. It records mood
entries into a local JSON store and derives a calendar view, weekly
statistics, and a mood distribution from them.

This file contains the main application flow, coordinating the various
components.

## Usage

```
moodlog [COMMAND]

Commands:
  log       Record a mood entry (Happy, Good, Neutral, Sad, Very-Sad)
  calendar  Show the mood calendar for a month
  stats     Show weekly statistics and the mood distribution (default)
  list      List recorded entries, newest first

Options:
  -v, --verbose                 Enable verbose output
  -h, --help                    Print help information
  -V, --version                 Print version information
```

## Configuration

The application can be configured with the following environment variables:
- `MOODLOG_DIR`: The directory holding the entry store (defaults to "~/Documents/moods")
- `RUST_LOG`: Log filtering directives
*/

use chrono::Local;
use clap::Parser;
use moodlog::cli::{CliArgs, Command};
use moodlog::config::Config;
use moodlog::errors::{AppError, AppResult};
use moodlog::store::JsonFileStore;
use moodlog::{cli, constants, ops, store};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the moodlog application.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads and validates configuration
/// 4. Ensures the data directory exists
/// 5. Constructs the entry store once and passes it to the selected operation
///
/// # Errors
///
/// This function can return various types of errors, including:
/// - Configuration errors (missing or invalid configuration)
/// - Storage errors (unreadable or corrupted entry store)
/// - Journal logic errors (invalid date format, unknown mood label)
fn main() -> AppResult<()> {
    // Obtain the current date once at the beginning
    let current_datetime = Local::now();
    let today = current_datetime.naive_local().date();

    // Parse command-line arguments
    let args = CliArgs::parse();

    // Initialize structured logging on stderr, keeping stdout for output
    let filter = if args.verbose {
        EnvFilter::new(constants::VERBOSE_LOG_LEVEL)
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_LEVEL))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting moodlog");
    debug!("CLI arguments: {:?}", args);

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure the data directory exists
    store::ensure_data_directory_exists(&config.data_dir)?;

    // The store is constructed once and injected into every operation.
    let store = JsonFileStore::new(config.entries_path());
    debug!("Entry store ready");

    match args.command.unwrap_or(Command::Stats) {
        Command::Log { mood, note, date } => {
            let date = match date {
                Some(date_str) => cli::parse_date(&date_str)
                    .map_err(|e| AppError::Journal(format!("Invalid date format: {}", e)))?,
                None => today,
            };
            ops::record_mood(&store, &mood, note, date)?;
        }
        Command::Calendar { month } => {
            let anchor = match month {
                Some(month_str) => cli::parse_month(&month_str)
                    .map_err(|e| AppError::Journal(format!("Invalid month format: {}", e)))?,
                None => today,
            };
            ops::show_calendar(&store, anchor, today)?;
        }
        Command::Stats => ops::show_stats(&store, today)?,
        Command::List { mood } => ops::list_entries(&store, mood.as_deref())?,
    }

    info!("Done");
    Ok(())
}
