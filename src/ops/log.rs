//! Recording a new mood entry.

use crate::catalog::{self, MOODS};
use crate::entry::MoodEntry;
use crate::errors::{AppError, AppResult};
use crate::store::{self, EntryStore};
use chrono::NaiveDate;
use tracing::info;

/// Records a mood entry for the given date and persists it.
///
/// The mood input is resolved against the catalog (case-insensitively, with
/// `-`/`_` accepted for spaces); entries can only ever be created with a
/// catalog label. Persistence is whole-collection replacement: the updated
/// collection is written back through the store in full.
///
/// # Errors
///
/// Returns `AppError::Journal` when the input names no catalog mood, or a
/// storage error when the collection cannot be loaded or saved.
pub fn record_mood(
    store: &dyn EntryStore,
    mood_input: &str,
    note: Option<String>,
    date: NaiveDate,
) -> AppResult<MoodEntry> {
    let mood = catalog::resolve(mood_input).ok_or_else(|| {
        let labels: Vec<&str> = MOODS.iter().map(|m| m.label).collect();
        AppError::Journal(format!(
            "Unknown mood '{}'. Valid moods are: {}",
            mood_input,
            labels.join(", ")
        ))
    })?;

    let entry = MoodEntry::new(date, mood.label, note);
    store::append_entry(store, entry.clone())?;

    info!("Recorded '{}' for {}", mood.label, entry.date_iso());
    println!("Logged {} {} for {}", mood.label, mood.emoji, entry.date_iso());

    Ok(entry)
}
