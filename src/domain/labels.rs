//! Helpers that cut sub-tokens out of hand-authored literal labels.
//!
//! These are plain substring operations, not number parsing: they assume the
//! catalog literals keep their current shape ("NNN% ...", "N-M weeks").

/// Text before the first `%` of a label (`"1,187% 3-year ROI"` -> `"1,187"`).
///
/// A label without `%` is returned whole.
pub fn leading_percentage(label: &str) -> &str {
    label.split('%').next().unwrap_or(label)
}

/// First whitespace-separated token of a timeline (`"2-4 weeks"` -> `"2-4"`).
pub fn timeline_upper_bound(timeline: &str) -> &str {
    timeline.split_whitespace().next().unwrap_or("")
}

/// Title-case a `snake_case` key (`"decision_latency"` -> `"Decision Latency"`).
///
/// Letters following a non-letter are upper-cased, all other letters are
/// lower-cased, matching how the keys have always been displayed.
pub fn title_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut previous_is_letter = false;

    for ch in key.replace('_', " ").chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(ch);
            previous_is_letter = false;
        }
    }

    out
}
