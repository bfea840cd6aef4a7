//! The fixed mood catalog.
//!
//! Moodlog tracks exactly five moods covering the sentiment range from
//! "Happy" to "Very Sad". The catalog is compiled-in data: moods are never
//! created or destroyed at runtime, and persisted entries reference a mood
//! by its label only. Display attributes (glyph, color) are resolved
//! through this module at render time so that persisted data can never
//! drift from the catalog definitions.

/// A single mood definition: a unique human-readable label, a display
/// glyph, and a hex display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mood {
    /// Unique human-readable label, e.g. "Happy".
    pub label: &'static str,
    /// Display glyph shown in calendar and list views.
    pub emoji: &'static str,
    /// Hex display color used by distribution output.
    pub color: &'static str,
}

/// The ordered mood catalog, from most to least positive.
///
/// Catalog order is load-bearing: distribution output follows it, and
/// most-common-mood ties resolve to the mood appearing earliest here.
pub static MOODS: [Mood; 5] = [
    Mood {
        label: "Happy",
        emoji: "😄",
        color: "#4CAF50",
    },
    Mood {
        label: "Good",
        emoji: "🙂",
        color: "#8BC34A",
    },
    Mood {
        label: "Neutral",
        emoji: "😐",
        color: "#FFC107",
    },
    Mood {
        label: "Sad",
        emoji: "🙁",
        color: "#FF9800",
    },
    Mood {
        label: "Very Sad",
        emoji: "😢",
        color: "#F44336",
    },
];

/// Looks up a catalog mood by its exact label.
///
/// Returns `None` for labels not present in the catalog. Stored entries
/// with unrecognized labels are a data-integrity error: derived statistics
/// skip them, while raw listings still show them verbatim.
pub fn find(label: &str) -> Option<&'static Mood> {
    MOODS.iter().find(|mood| mood.label == label)
}

/// Resolves user-supplied input to a catalog mood.
///
/// Accepts labels case-insensitively and treats `-` and `_` as spaces, so
/// `very-sad`, `VERY_SAD` and `Very Sad` all resolve to the same mood.
/// Returns `None` when the input matches no catalog label.
pub fn resolve(input: &str) -> Option<&'static Mood> {
    let normalized = input.replace(['-', '_'], " ");
    MOODS
        .iter()
        .find(|mood| mood.label.eq_ignore_ascii_case(normalized.trim()))
}

/// Returns true if the label names a catalog mood.
pub fn is_known(label: &str) -> bool {
    find(label).is_some()
}
