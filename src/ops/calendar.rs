//! The month calendar view.

use crate::analytics::{month_grid, MonthGrid};
use crate::constants;
use crate::errors::AppResult;
use crate::store::EntryStore;
use chrono::NaiveDate;
use tracing::debug;

/// Renders a month grid as text: a heading, a weekday header row, leading
/// blanks so day-of-week columns align, then one row per calendar week.
///
/// Days with a recorded mood show its glyph; the current date is marked
/// with `*`. Days without entries render as the bare day number, so the
/// view is never blank.
pub fn render_month(grid: &MonthGrid) -> String {
    let heading = NaiveDate::from_ymd_opt(grid.year, grid.month, 1)
        .map(|d| d.format(constants::MONTH_HEADING_FORMAT).to_string())
        .unwrap_or_else(|| format!("{}-{:02}", grid.year, grid.month));

    let mut out = String::new();
    out.push_str(&heading);
    out.push('\n');

    for name in constants::DAY_NAMES {
        out.push_str(&format!("{:<6}", name));
    }
    out.push('\n');

    let blank = " ".repeat(6);
    let mut cells: Vec<String> = (0..grid.leading_blanks).map(|_| blank.clone()).collect();
    for cell in &grid.days {
        let marker = if cell.is_today { "*" } else { " " };
        let glyph = cell.mood.map(|m| m.emoji).unwrap_or(" ");
        cells.push(format!("{:>2}{}{:<2} ", cell.day, marker, glyph));
    }

    for week in cells.chunks(constants::DAYS_PER_WEEK as usize) {
        out.push_str(&week.join(""));
        out.push('\n');
    }

    out
}

/// Loads the entry collection and prints the calendar for the month
/// containing `anchor`.
pub fn show_calendar(
    store: &dyn EntryStore,
    anchor: NaiveDate,
    today: NaiveDate,
) -> AppResult<()> {
    let entries = store.load()?;
    debug!("Rendering calendar over {} entries", entries.len());

    let grid = month_grid(&entries, anchor, today);
    print!("{}", render_month(&grid));
    Ok(())
}
