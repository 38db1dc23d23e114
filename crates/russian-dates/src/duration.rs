//! Elapsed-time resolution ("1 час 30 минут") in minutes.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Duration used when a message names none.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

static HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*(?:часов|часа|час)").expect("hour quantity pattern is valid")
});

static MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*(?:минут|минуты|минута|мин)").expect("minute quantity pattern is valid")
});

/// Resolve a duration in minutes from `text`.
///
/// The hour phrase and the minute phrase are searched independently and
/// summed. A zero total, including no phrase at all, gives
/// [`DEFAULT_DURATION_MINUTES`]. Never fails.
///
/// # Examples
///
/// ```
/// use russian_dates::duration::resolve_duration;
///
/// assert_eq!(resolve_duration("1 час 30 минут"), 90);
/// assert_eq!(resolve_duration("нет времени"), 60);
/// ```
pub fn resolve_duration(text: &str) -> u32 {
    let normalized = text.to_lowercase();
    let hours = first_quantity(&HOURS, &normalized);
    let minutes = first_quantity(&MINUTES, &normalized);
    let total = hours.saturating_mul(60).saturating_add(minutes);

    if total == 0 {
        DEFAULT_DURATION_MINUTES
    } else {
        debug!(hours, minutes, total, "resolved duration");
        total
    }
}

/// The number in the first match of `pattern`, or 0 when there is no match
/// or the number does not fit.
fn first_quantity(pattern: &Regex, text: &str) -> u32 {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|n| n.as_str().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hours_and_minutes_sum() {
        assert_eq!(resolve_duration("1 час 30 минут"), 90);
        assert_eq!(resolve_duration("2 часа 15 мин"), 135);
    }

    #[test]
    fn test_hours_only() {
        assert_eq!(resolve_duration("на 2 часа"), 120);
        assert_eq!(resolve_duration("5 часов"), 300);
        assert_eq!(resolve_duration("1час"), 60);
    }

    #[test]
    fn test_minutes_only() {
        assert_eq!(resolve_duration("на 45 минут"), 45);
        assert_eq!(resolve_duration("2 минуты"), 2);
        assert_eq!(resolve_duration("1 минута"), 1);
        assert_eq!(resolve_duration("20мин"), 20);
    }

    #[test]
    fn test_minutes_before_hours_still_sum() {
        assert_eq!(resolve_duration("30 минут и ещё 1 час"), 90);
    }

    #[test]
    fn test_default_when_absent_or_zero() {
        assert_eq!(resolve_duration("нет времени"), DEFAULT_DURATION_MINUTES);
        assert_eq!(resolve_duration(""), DEFAULT_DURATION_MINUTES);
        assert_eq!(resolve_duration("0 минут"), DEFAULT_DURATION_MINUTES);
    }

    #[test]
    fn test_overflowing_number_counts_as_zero() {
        assert_eq!(resolve_duration("99999999999999999999 минут"), 60);
        assert_eq!(resolve_duration("99999999999999999999 минут и 2 часа"), 120);
    }

    #[test]
    fn test_large_hours_saturate() {
        assert_eq!(resolve_duration("4000000000 часов"), u32::MAX);
    }

    proptest! {
        #[test]
        fn prop_duration_is_never_zero(text in "\\PC{0,40}") {
            prop_assert!(resolve_duration(&text) > 0);
        }

        #[test]
        fn prop_hours_and_minutes_compose(h in 0u32..48, m in 0u32..600) {
            let text = format!("{h} часов {m} минут");
            let expected = if h * 60 + m == 0 { 60 } else { h * 60 + m };
            prop_assert_eq!(resolve_duration(&text), expected);
        }
    }
}
