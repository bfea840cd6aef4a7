/*!
# Moodlog

Moodlog is a local mood journal: pick one of five moods, optionally attach
a note, and the entry lands in a single JSON store on disk. The tool then
derives a calendar heat view and basic analytics (weekly counts, most
common mood, mood distribution) over the stored entries.

## Core Features

- Record a mood entry for today or a specific date
- Render a month calendar with mood glyphs per day
- Weekly statistics: entry count, most common mood, insight line
- Mood distribution over the whole history
- List and filter recorded entries

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `catalog`: The fixed five-mood catalog
- `entry`: The mood entry model and collection operations
- `store`: The injectable entry store (JSON slot persistence)
- `analytics`: Pure aggregation engine (calendar, distribution, weekly stats)
- `insights`: Static insight strings
- `ops`: User-facing operations wiring the above together

## Usage Example

```rust,no_run
use chrono::Local;
use moodlog::store::{EntryStore, JsonFileStore};
use moodlog::{analytics, Config};

fn main() -> moodlog::AppResult<()> {
    // Load configuration and open the store
    let config = Config::load()?;
    let store = JsonFileStore::new(config.entries_path());

    // Derive this week's statistics
    let entries = store.load()?;
    let today = Local::now().naive_local().date();
    let stats = analytics::weekly_stats(&entries, today);
    println!("{} entries this week", stats.weekly_count);
    Ok(())
}
```
*/

/// Pure aggregation engine deriving calendar views and statistics
pub mod analytics;
/// The fixed five-mood catalog
pub mod catalog;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized application constants
pub mod constants;
/// The mood entry model and collection operations
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// Static insight strings keyed by mood
pub mod insights;
/// User-facing operations behind the CLI
pub mod ops;
/// Entry store persistence (JSON slot on disk)
pub mod store;

// Re-export important types for convenience
pub use catalog::{Mood, MOODS};
pub use cli::CliArgs;
pub use config::Config;
pub use entry::MoodEntry;
pub use errors::{AppError, AppResult};
pub use store::{EntryStore, JsonFileStore};
