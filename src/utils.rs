//! Input helpers for the minutes field.

use crate::config::MAX_MINUTES_DIGITS;
use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regex for draft filtering
static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d*$").unwrap());

/// Whether the text is acceptable as an in-progress minutes entry.
///
/// Empty is allowed while the user is mid-edit; anything non-digit or
/// longer than [`MAX_MINUTES_DIGITS`] is rejected outright. Whether the
/// draft makes a valid duration is only decided when a start is attempted.
pub fn is_minutes_draft(text: &str) -> bool {
    text.len() <= MAX_MINUTES_DIGITS && DIGITS_REGEX.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_digit_drafts_and_empty() {
        assert!(is_minutes_draft(""));
        assert!(is_minutes_draft("5"));
        assert!(is_minutes_draft("042"));
        assert!(is_minutes_draft("120"));
    }

    #[test]
    fn rejects_non_digits_and_overlong_drafts() {
        assert!(!is_minutes_draft("5m"));
        assert!(!is_minutes_draft("-3"));
        assert!(!is_minutes_draft("1.5"));
        assert!(!is_minutes_draft(" 5"));
        assert!(!is_minutes_draft("1234"));
    }
}
