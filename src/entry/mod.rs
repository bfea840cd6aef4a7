//! The mood entry model and the composable operations over entry collections.
//!
//! A `MoodEntry` is a single dated record of a user-selected mood plus an
//! optional free-text note. Entries are value types: created once when the
//! user submits a mood, never mutated afterwards, and removed only by
//! replacing the whole persisted collection.
//!
//! The collection itself is an insertion-ordered `Vec<MoodEntry>`: append
//! order, not guaranteed date-sorted. Filtering and sorting are deliberately
//! separate operations so callers can compose them as needed.

use crate::constants;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated mood record.
///
/// The mood is stored as the catalog *label* only; glyph and color are
/// resolved through [`crate::catalog`] at render time. An entry may carry a
/// label unknown to the catalog (e.g. hand-edited data); such entries are
/// skipped by derived statistics but still listed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Calendar date of the entry (no time component). Serialized as ISO
    /// "YYYY-MM-DD".
    pub date: NaiveDate,

    /// Catalog mood label, e.g. "Happy".
    pub mood: String,

    /// Optional free-text note attached at submission time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MoodEntry {
    /// Creates a new entry for the given date and mood label.
    pub fn new(date: NaiveDate, mood: impl Into<String>, note: Option<String>) -> Self {
        MoodEntry {
            date,
            mood: mood.into(),
            note,
        }
    }

    /// Formats the entry date as an ISO "YYYY-MM-DD" string.
    pub fn date_iso(&self) -> String {
        self.date.format(constants::DATE_FORMAT_ISO).to_string()
    }
}

/// Returns the subsequence of entries matching the given mood label,
/// preserving original collection order.
///
/// `None` is the "no filter" sentinel and returns every entry. Matching is
/// exact label equality, since filtering happens against stored data, not user
/// input, so no normalization is applied here.
pub fn filter_by_mood<'a>(entries: &'a [MoodEntry], label: Option<&str>) -> Vec<&'a MoodEntry> {
    match label {
        Some(label) => entries.iter().filter(|entry| entry.mood == label).collect(),
        None => entries.iter().collect(),
    }
}

/// Sorts entry references by descending date.
///
/// The sort is stable: entries sharing a date keep their relative
/// (insertion) order. This is a separate operation from filtering so the
/// two stay independently composable.
pub fn sorted_by_date_desc<'a>(entries: Vec<&'a MoodEntry>) -> Vec<&'a MoodEntry> {
    let mut sorted = entries;
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
