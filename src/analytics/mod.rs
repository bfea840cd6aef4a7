//! The aggregation engine: pure functions deriving calendar views and
//! statistics from an entry collection.
//!
//! This module never mutates the collection it is given and keeps no state
//! between calls, so every operation is idempotent and safe to call
//! repeatedly or out of order. It carries the correctness burden of the
//! system: calendar bucketing, mood-distribution counts, weekly statistics,
//! and the most-common-mood ranking all live here.
//!
//! Two policies are fixed deliberately and relied on by callers:
//! - Distribution output always contains every catalog mood, zero counts
//!   included, in catalog order.
//! - Most-common-mood ties resolve to the mood appearing earliest in
//!   catalog order (strict greater-than folding).

use crate::catalog::{self, Mood, MOODS};
use crate::constants;
use crate::entry::MoodEntry;
use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

/// Occurrence count for one catalog mood, carrying the display color so
/// chart-style consumers need no second catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodCount {
    /// Catalog mood label.
    pub label: &'static str,
    /// Number of matching entries.
    pub count: usize,
    /// Hex display color from the catalog.
    pub color: &'static str,
}

/// One day cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day of month, 1-based.
    pub day: u32,
    /// Mood recorded for this day, if any. Taken from the *first* entry in
    /// collection order whose date matches; absent when no entry exists or
    /// the first match carries a label unknown to the catalog.
    pub mood: Option<&'static Mood>,
    /// True when this cell is the current date.
    pub is_today: bool,
}

/// Calendar placement for one month: leading blank cells so day-of-week
/// columns align, followed by one cell per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// Year of the month shown.
    pub year: i32,
    /// Month shown, 1-based.
    pub month: u32,
    /// Number of blank cells before day 1, equal to the weekday index of
    /// day 1 relative to the configured week start.
    pub leading_blanks: u32,
    /// Cells for days 1..=days-in-month, in order.
    pub days: Vec<DayCell>,
}

/// Weekly statistics over the current-week interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyStats {
    /// Number of entries dated within the inclusive current-week interval,
    /// regardless of mood label.
    pub weekly_count: usize,
    /// The catalog mood with the highest count among this week's entries.
    /// `None` when the week has no entries with a catalog mood, never a
    /// zero-count mood.
    pub most_common_mood: Option<MoodCount>,
}

/// Days elapsed since the configured week start, 0..=6.
fn days_from_week_start(day: Weekday) -> u32 {
    (day.num_days_from_sunday() + 7 - constants::WEEK_START.num_days_from_sunday()) % 7
}

/// The closed current-week interval [start, end] containing `today`,
/// anchored on the configured week start.
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today - Duration::days(days_from_week_start(today.weekday()) as i64);
    let end = start + Duration::days(constants::DAYS_PER_WEEK - 1);
    (start, end)
}

/// Counts entries per catalog mood over the whole collection.
///
/// Returns one [`MoodCount`] per catalog mood in catalog order, zero counts
/// included, so chart legends stay stable as data comes and goes. Entries
/// whose label is not in the catalog are skipped.
pub fn mood_distribution(entries: &[MoodEntry]) -> Vec<MoodCount> {
    MOODS
        .iter()
        .map(|mood| MoodCount {
            label: mood.label,
            count: entries.iter().filter(|e| e.mood == mood.label).count(),
            color: mood.color,
        })
        .collect()
}

/// Computes weekly statistics for the week containing `today`.
///
/// `weekly_count` counts every entry dated inside the inclusive interval.
/// `most_common_mood` folds the per-mood weekly counts in catalog order
/// with a strict greater-than comparison, so the first mood reaching the
/// maximum count wins ties; a week with no catalog-mood entries yields
/// `None`.
pub fn weekly_stats(entries: &[MoodEntry], today: NaiveDate) -> WeeklyStats {
    let (start, end) = week_bounds(today);
    let weekly: Vec<&MoodEntry> = entries
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .collect();

    let weekly_counts = MOODS.iter().map(|mood| MoodCount {
        label: mood.label,
        count: weekly.iter().filter(|e| e.mood == mood.label).count(),
        color: mood.color,
    });

    let most_common_mood = weekly_counts
        .reduce(|best, next| if next.count > best.count { next } else { best })
        .filter(|best| best.count > 0);

    WeeklyStats {
        weekly_count: weekly.len(),
        most_common_mood,
    }
}

/// Number of days in the month containing `first_of_month`.
fn days_in_month(first_of_month: NaiveDate) -> u32 {
    first_of_month
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        // Only reachable at the edge of chrono's representable range.
        .unwrap_or(31)
}

/// The mood shown for a calendar date: the first entry in collection order
/// with that exact date, resolved against the catalog.
fn mood_for_date(entries: &[MoodEntry], date: NaiveDate) -> Option<&'static Mood> {
    entries
        .iter()
        .find(|e| e.date == date)
        .and_then(|e| catalog::find(&e.mood))
}

/// Builds the calendar grid for the month containing `anchor`.
///
/// Produces a cell for each day 1..=days-in-month with the recorded mood
/// (if any) and a today marker, plus the count of leading blank cells
/// needed to align day-of-week columns. Callers must not rely on
/// "most recent entry wins" for days with several entries: the first match
/// in collection order is shown.
pub fn month_grid(entries: &[MoodEntry], anchor: NaiveDate, today: NaiveDate) -> MonthGrid {
    let first = anchor - Duration::days(anchor.day() as i64 - 1);
    let total_days = days_in_month(first);

    let days = (0..total_days)
        .map(|offset| {
            let date = first + Duration::days(offset as i64);
            DayCell {
                day: date.day(),
                mood: mood_for_date(entries, date),
                is_today: date == today,
            }
        })
        .collect();

    MonthGrid {
        year: first.year(),
        month: first.month(),
        leading_blanks: days_from_week_start(first.weekday()),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(d: &str, mood: &str) -> MoodEntry {
        MoodEntry::new(date(d), mood, None)
    }

    // Two entries sharing May 1st, one on May 3rd.
    fn may_entries() -> Vec<MoodEntry> {
        vec![
            entry("2024-05-01", "Happy"),
            entry("2024-05-01", "Sad"),
            entry("2024-05-03", "Happy"),
        ]
    }

    #[test]
    fn test_week_bounds_are_sunday_anchored_and_inclusive() {
        // 2024-05-15 was a Wednesday; its week is Sun 05-12 ..= Sat 05-18.
        let (start, end) = week_bounds(date("2024-05-15"));
        assert_eq!(start, date("2024-05-12"));
        assert_eq!(end, date("2024-05-18"));

        // A Sunday is its own week start; a Saturday is its own week end.
        assert_eq!(week_bounds(date("2024-05-12")).0, date("2024-05-12"));
        assert_eq!(week_bounds(date("2024-05-18")).1, date("2024-05-18"));
    }

    #[test]
    fn test_distribution_counts_and_keeps_zero_moods() {
        let counts = mood_distribution(&may_entries());

        let labels: Vec<_> = counts.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Happy", "Good", "Neutral", "Sad", "Very Sad"]);

        assert_eq!(counts[0].count, 2); // Happy
        assert_eq!(counts[3].count, 1); // Sad
        assert_eq!(counts[1].count, 0);
        assert_eq!(counts[2].count, 0);
        assert_eq!(counts[4].count, 0);
        assert_eq!(counts[0].color, "#4CAF50");
    }

    #[test]
    fn test_distribution_sums_to_entry_count_for_valid_labels() {
        let entries = may_entries();
        let total: usize = mood_distribution(&entries).iter().map(|c| c.count).sum();
        assert_eq!(total, entries.len());
    }

    #[test]
    fn test_distribution_skips_unknown_labels() {
        let mut entries = may_entries();
        entries.push(entry("2024-05-04", "Melancholic"));

        let total: usize = mood_distribution(&entries).iter().map(|c| c.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_weekly_count_is_a_pure_date_window_count() {
        let today = date("2024-05-15");
        let entries = vec![
            entry("2024-05-12", "Happy"),    // week start, inclusive
            entry("2024-05-18", "Sad"),      // week end, inclusive
            entry("2024-05-11", "Happy"),    // day before the window
            entry("2024-05-19", "Very Sad"), // day after the window
        ];

        assert_eq!(weekly_stats(&entries, today).weekly_count, 2);
    }

    #[test]
    fn test_most_common_mood_has_maximal_count() {
        let today = date("2024-05-15");
        let entries = vec![
            entry("2024-05-13", "Sad"),
            entry("2024-05-14", "Sad"),
            entry("2024-05-14", "Happy"),
        ];

        let stats = weekly_stats(&entries, today);
        let best = stats.most_common_mood.unwrap();
        assert_eq!(best.label, "Sad");
        assert_eq!(best.count, 2);
        assert_eq!(best.color, "#FF9800");
    }

    #[test]
    fn test_most_common_mood_tie_goes_to_catalog_order() {
        let today = date("2024-05-15");
        // Sad and Happy both appear once; Happy is earlier in the catalog.
        let entries = vec![entry("2024-05-13", "Sad"), entry("2024-05-14", "Happy")];

        let best = weekly_stats(&entries, today).most_common_mood.unwrap();
        assert_eq!(best.label, "Happy");
        assert_eq!(best.count, 1);
    }

    #[test]
    fn test_empty_week_has_no_most_common_mood() {
        let today = date("2024-05-15");

        let stats = weekly_stats(&[], today);
        assert_eq!(stats.weekly_count, 0);
        assert!(stats.most_common_mood.is_none());

        // Entries exist, but none in the current week.
        let stats = weekly_stats(&[entry("2024-04-01", "Happy")], today);
        assert_eq!(stats.weekly_count, 0);
        assert!(stats.most_common_mood.is_none());
    }

    #[test]
    fn test_week_window_scenarios() {
        let today = date("2024-05-15");

        // Only the Happy entry is in-week.
        let entries = vec![
            entry("2024-05-05", "Very Sad"),
            entry("2024-05-06", "Very Sad"),
            entry("2024-05-14", "Happy"),
        ];
        let stats = weekly_stats(&entries, today);
        assert_eq!(stats.weekly_count, 1);
        assert_eq!(stats.most_common_mood.unwrap().label, "Happy");

        // Both Very Sad entries fall in-week, the Happy entry does not.
        let entries = vec![
            entry("2024-05-13", "Very Sad"),
            entry("2024-05-14", "Very Sad"),
            entry("2024-05-05", "Happy"),
        ];
        let stats = weekly_stats(&entries, today);
        assert_eq!(stats.weekly_count, 2);
        assert_eq!(stats.most_common_mood.unwrap().label, "Very Sad");
    }

    #[test]
    fn test_unknown_labels_count_toward_weekly_total_but_not_ranking() {
        let today = date("2024-05-15");
        let entries = vec![
            entry("2024-05-13", "Melancholic"),
            entry("2024-05-14", "Good"),
        ];

        let stats = weekly_stats(&entries, today);
        assert_eq!(stats.weekly_count, 2);
        assert_eq!(stats.most_common_mood.unwrap().label, "Good");
    }

    #[test]
    fn test_month_grid_shape_for_may_2024() {
        // May 2024 starts on a Wednesday and has 31 days.
        let grid = month_grid(&[], date("2024-05-15"), date("2024-05-15"));

        assert_eq!(grid.year, 2024);
        assert_eq!(grid.month, 5);
        assert_eq!(grid.leading_blanks, 3);
        assert_eq!(grid.days.len(), 31);
        assert_eq!(grid.days[0].day, 1);
        assert_eq!(grid.days[30].day, 31);
    }

    #[test]
    fn test_month_grid_first_match_wins_for_duplicate_dates() {
        let grid = month_grid(&may_entries(), date("2024-05-15"), date("2024-05-15"));

        // Day 1 has both a Happy and a Sad entry; the first in collection
        // order is shown.
        assert_eq!(grid.days[0].mood.unwrap().label, "Happy");
        assert_eq!(grid.days[2].mood.unwrap().label, "Happy");
        assert!(grid.days[1].mood.is_none());
    }

    #[test]
    fn test_month_grid_marks_today_exactly_once() {
        let grid = month_grid(&[], date("2024-05-01"), date("2024-05-15"));
        let today_cells: Vec<_> = grid.days.iter().filter(|c| c.is_today).collect();
        assert_eq!(today_cells.len(), 1);
        assert_eq!(today_cells[0].day, 15);

        // Today outside the shown month marks nothing.
        let grid = month_grid(&[], date("2024-04-10"), date("2024-05-15"));
        assert!(grid.days.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_month_grid_resolves_unknown_labels_to_absent() {
        let entries = vec![entry("2024-05-02", "Melancholic")];
        let grid = month_grid(&entries, date("2024-05-01"), date("2024-05-15"));
        assert!(grid.days[1].mood.is_none());
    }

    #[test]
    fn test_month_grid_is_idempotent() {
        let entries = may_entries();
        let anchor = date("2024-05-20");
        let today = date("2024-05-20");

        assert_eq!(
            month_grid(&entries, anchor, today),
            month_grid(&entries, anchor, today)
        );
    }

    #[test]
    fn test_month_grid_handles_december_rollover_and_leap_february() {
        let grid = month_grid(&[], date("2023-12-25"), date("2023-12-25"));
        assert_eq!(grid.days.len(), 31);

        let grid = month_grid(&[], date("2024-02-10"), date("2024-02-10"));
        assert_eq!(grid.days.len(), 29);
    }
}
