//! Static insight strings keyed by the week's most common mood.
//!
//! This is a total function over its input: every label maps to a defined
//! sentence, unknown labels fall back to a generic reflection line, and an
//! absent mood (no entries this week) maps to an encouragement line. There
//! is no error case, so the presentation layer always has something to
//! render.

/// Returns the insight sentence for the given most-common-mood label.
pub fn insight_for(label: Option<&str>) -> &'static str {
    match label {
        None => "Keep tracking to see your mood patterns!",
        Some("Happy") => "You felt most joyful this week! 🌞 Keep shining.",
        Some("Good") => "A good week! Little moments of positivity add up. ✨",
        Some("Neutral") => "A balanced week. Observe your feelings with kindness.🧘",
        Some("Sad") => "It was a challenging week. Be gentle with yourself. 🌱",
        Some("Very Sad") => "Feeling low this week. Remember, it's okay to seek support. ❤️",
        Some(_) => "Reflect on the emotions that colored your week.",
    }
}
