//! High-level operations behind the moodlog CLI.
//!
//! Each operation pairs a pure `render_*` function (testable without any
//! I/O) with a thin wrapper that loads the entry collection through the
//! injected store and prints the rendered result. The wrappers are the only
//! place where engine output meets stdout, and they always print a
//! deterministic fallback (empty-state text, zero counts) instead of
//! producing blank output.

pub mod calendar;
pub mod list;
pub mod log;
pub mod stats;

// Re-export commonly used functions
pub use calendar::{render_month, show_calendar};
pub use list::{list_entries, render_entries};
pub use log::record_mood;
pub use stats::{render_stats, show_stats};
