//! End-to-end flows through store, engine and renderers.

use chrono::NaiveDate;
use tempfile::tempdir;

use moodlog::analytics::{month_grid, mood_distribution, weekly_stats};
use moodlog::entry::{filter_by_mood, sorted_by_date_desc};
use moodlog::ops;
use moodlog::store::{EntryStore, JsonFileStore};

// Fixed reference date for deterministic testing: a Wednesday whose week
// runs Sun 2024-05-12 ..= Sat 2024-05-18.
fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
}

fn set_up_store() -> (JsonFileStore, tempfile::TempDir) {
    let temp_dir = tempdir().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("mood_entries.json"));
    (store, temp_dir)
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_record_then_stats_flow() {
    let (store, _temp_dir) = set_up_store();
    let today = fixed_today();

    ops::record_mood(&store, "very sad", None, date("2024-05-13")).unwrap();
    ops::record_mood(&store, "very-sad", None, date("2024-05-14")).unwrap();
    ops::record_mood(&store, "happy", None, date("2024-05-05")).unwrap(); // out of week

    let entries = store.load().unwrap();
    let rendered = ops::render_stats(&entries, today);

    assert!(rendered.contains("Entries this week: 2"));
    assert!(rendered.contains("Most common mood: Very Sad 😢 (2 this week)"));

    // Distribution spans the whole history, including the out-of-week entry.
    let happy_row = rendered
        .lines()
        .find(|line| line.trim_start().starts_with("Happy"))
        .unwrap();
    assert!(happy_row.ends_with('1'));
}

#[test]
fn test_record_then_calendar_flow() {
    let (store, _temp_dir) = set_up_store();
    let today = fixed_today();

    // Two entries on May 1st: the first one recorded wins calendar placement.
    ops::record_mood(&store, "happy", None, date("2024-05-01")).unwrap();
    ops::record_mood(&store, "sad", None, date("2024-05-01")).unwrap();
    ops::record_mood(&store, "happy", None, date("2024-05-03")).unwrap();

    let entries = store.load().unwrap();
    let grid = month_grid(&entries, date("2024-05-01"), today);

    assert_eq!(grid.days[0].mood.unwrap().label, "Happy");
    assert_eq!(grid.days[2].mood.unwrap().label, "Happy");

    let rendered = ops::render_month(&grid);
    assert!(rendered.starts_with("May 2024"));
    assert!(rendered.contains("😄"));
    // The Sad entry shares May 1st with an earlier Happy entry and is
    // never placed, so its glyph appears nowhere in the grid.
    assert!(!rendered.contains("🙁"));
    assert!(rendered.contains("15*"));
}

#[test]
fn test_duplicate_day_distribution() {
    let (store, _temp_dir) = set_up_store();

    ops::record_mood(&store, "Happy", None, date("2024-05-01")).unwrap();
    ops::record_mood(&store, "Sad", None, date("2024-05-01")).unwrap();
    ops::record_mood(&store, "Happy", None, date("2024-05-03")).unwrap();

    let entries = store.load().unwrap();

    let counts = mood_distribution(&entries);
    let by_label: Vec<(&str, usize)> = counts.iter().map(|c| (c.label, c.count)).collect();
    assert_eq!(
        by_label,
        vec![
            ("Happy", 2),
            ("Good", 0),
            ("Neutral", 0),
            ("Sad", 1),
            ("Very Sad", 0),
        ]
    );
}

#[test]
fn test_filter_and_sort_compose_for_listing() {
    let (store, _temp_dir) = set_up_store();

    ops::record_mood(&store, "happy", Some("first".to_string()), date("2024-05-01")).unwrap();
    ops::record_mood(&store, "sad", None, date("2024-05-02")).unwrap();
    ops::record_mood(&store, "happy", Some("second".to_string()), date("2024-05-03")).unwrap();

    let entries = store.load().unwrap();

    // Filter preserves stored order; sort is applied separately.
    let filtered = filter_by_mood(&entries, Some("Happy"));
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].note.as_deref(), Some("first"));

    let sorted = sorted_by_date_desc(filtered);
    assert_eq!(sorted[0].note.as_deref(), Some("second"));

    let rendered = ops::render_entries(&sorted);
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("2024-05-03"));
    assert!(lines[1].starts_with("2024-05-01"));
}

#[test]
fn test_empty_store_renders_deterministic_fallbacks() {
    let (store, _temp_dir) = set_up_store();
    let today = fixed_today();

    let entries = store.load().unwrap();
    assert!(entries.is_empty());

    let stats = weekly_stats(&entries, today);
    assert_eq!(stats.weekly_count, 0);
    assert!(stats.most_common_mood.is_none());

    let rendered = ops::render_stats(&entries, today);
    assert!(rendered.contains("Entries this week: 0"));
    assert!(rendered.contains("Not enough data yet this week."));
    assert!(rendered.contains("Keep tracking to see your mood patterns!"));

    assert_eq!(ops::render_entries(&[]), "No entries yet.\n");

    // The calendar still renders a full grid.
    let grid = month_grid(&entries, today, today);
    assert_eq!(grid.days.len(), 31);
}

#[test]
fn test_unknown_labels_are_listed_but_not_ranked() {
    let (store, _temp_dir) = set_up_store();
    let today = fixed_today();

    // Simulate hand-edited data: write an unknown label straight to the slot.
    store
        .save(&[
            moodlog::MoodEntry::new(date("2024-05-13"), "Melancholic", None),
            moodlog::MoodEntry::new(date("2024-05-14"), "Good", None),
        ])
        .unwrap();

    let entries = store.load().unwrap();

    let stats = weekly_stats(&entries, today);
    assert_eq!(stats.weekly_count, 2);
    assert_eq!(stats.most_common_mood.unwrap().label, "Good");

    let sorted = sorted_by_date_desc(filter_by_mood(&entries, None));
    let rendered = ops::render_entries(&sorted);
    assert!(rendered.contains("Melancholic"));
}
