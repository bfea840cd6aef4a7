//! Listing recorded entries, optionally filtered by mood.

use crate::catalog;
use crate::entry::{filter_by_mood, sorted_by_date_desc, MoodEntry};
use crate::errors::{AppError, AppResult};
use crate::store::EntryStore;
use tracing::debug;

/// Fallback line shown when no entries match.
const NO_ENTRIES: &str = "No entries yet.";

/// Renders entry references as one line per entry.
///
/// Entries with a catalog mood show its glyph; entries carrying an unknown
/// label are listed verbatim without one; data-integrity problems are
/// visible here even though statistics skip them. An empty input renders
/// the deterministic empty-state line instead of nothing.
pub fn render_entries(entries: &[&MoodEntry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", NO_ENTRIES);
    }

    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("{}  {}", entry.date_iso(), entry.mood));
        if let Some(mood) = catalog::find(&entry.mood) {
            out.push(' ');
            out.push_str(mood.emoji);
        }
        if let Some(note) = &entry.note {
            out.push_str(&format!(" ({})", note));
        }
        out.push('\n');
    }
    out
}

/// Loads the collection and prints entries newest-first, optionally
/// filtered by mood.
///
/// Filtering and sorting stay separate operations: the filter preserves the
/// stored collection order, and the date sort is applied to its result.
///
/// # Errors
///
/// Returns `AppError::Journal` when the filter input names no catalog mood.
pub fn list_entries(store: &dyn EntryStore, mood_filter: Option<&str>) -> AppResult<()> {
    let label = match mood_filter {
        Some(input) => Some(
            catalog::resolve(input)
                .map(|mood| mood.label)
                .ok_or_else(|| {
                    AppError::Journal(format!("Unknown mood '{}' in --mood filter", input))
                })?,
        ),
        None => None,
    };

    let entries = store.load()?;
    debug!(
        "Listing {} entries (filter: {:?})",
        entries.len(),
        label
    );

    let filtered = filter_by_mood(&entries, label);
    let sorted = sorted_by_date_desc(filtered);
    print!("{}", render_entries(&sorted));
    Ok(())
}
