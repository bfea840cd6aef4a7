//! The weekly statistics and mood distribution view.

use crate::analytics::{mood_distribution, weekly_stats};
use crate::catalog;
use crate::entry::MoodEntry;
use crate::errors::AppResult;
use crate::insights::insight_for;
use crate::store::EntryStore;
use chrono::NaiveDate;
use tracing::debug;

/// Fallback line shown when the current week has no most common mood.
const NO_WEEKLY_DATA: &str = "Not enough data yet this week.";

/// Renders the analytics view: weekly entry count, most common mood, the
/// matching insight line, and the full mood distribution.
///
/// The output is deterministic for every input. An empty collection renders
/// zero counts, the no-data fallback and the generic encouragement insight
/// rather than blank output. The distribution always lists all five catalog
/// moods, zero counts included.
pub fn render_stats(entries: &[MoodEntry], today: NaiveDate) -> String {
    let stats = weekly_stats(entries, today);
    let insight = insight_for(stats.most_common_mood.as_ref().map(|m| m.label));

    let mut out = String::new();
    out.push_str("Mood Analytics\n\n");

    out.push_str(&format!("Entries this week: {}\n", stats.weekly_count));

    match &stats.most_common_mood {
        Some(best) => {
            // The glyph comes from the catalog; the ranking carries only
            // label, count and color.
            let glyph = catalog::find(best.label).map(|m| m.emoji).unwrap_or("");
            out.push_str(&format!(
                "Most common mood: {} {} ({} this week)\n",
                best.label, glyph, best.count
            ));
        }
        None => out.push_str(&format!("Most common mood: {}\n", NO_WEEKLY_DATA)),
    }

    out.push_str(&format!("{}\n\n", insight));

    out.push_str("Mood Distribution\n");
    for row in mood_distribution(entries) {
        let glyph = catalog::find(row.label).map(|m| m.emoji).unwrap_or("");
        out.push_str(&format!("  {:<9} {}  {}\n", row.label, glyph, row.count));
    }

    out
}

/// Loads the entry collection and prints the analytics view for the week
/// containing `today`.
pub fn show_stats(store: &dyn EntryStore, today: NaiveDate) -> AppResult<()> {
    let entries = store.load()?;
    debug!("Rendering stats over {} entries", entries.len());

    print!("{}", render_stats(&entries, today));
    Ok(())
}
