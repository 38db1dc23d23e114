//! Start/end composition from a message: date + time + default duration.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use tracing::debug;

use crate::date::{resolve_date, ParsedDate};
use crate::time::{resolve_time, ParsedTime};

/// A `start <= end` pair of instants in the configured timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeRange {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
}

impl DateTimeRange {
    /// Build a range `minutes` long starting at `start`. If the end would
    /// overflow the representable range, the range collapses to `start`.
    pub fn starting_at(start: DateTime<Tz>, minutes: u32) -> Self {
        let end = start
            .checked_add_signed(Duration::minutes(i64::from(minutes)))
            .unwrap_or(start);
        Self { start, end }
    }

    pub fn start(&self) -> DateTime<Tz> {
        self.start
    }

    pub fn end(&self) -> DateTime<Tz> {
        self.end
    }

    /// Same start, new length.
    pub fn with_duration(self, minutes: u32) -> Self {
        Self::starting_at(self.start, minutes)
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start.time()
    }

    /// RFC 3339 start and end, as sent to the calendar backend.
    pub fn to_iso_pair(&self) -> (String, String) {
        (self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

/// Resolve a start/end pair from `text`.
///
/// The date defaults to the reference date and the time to 09:00; the end
/// is `default_duration_minutes` after the start. Callers wanting an explicit
/// duration replace the end with [`DateTimeRange::with_duration`].
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::Europe::Moscow;
/// use russian_dates::compose::resolve_datetime;
///
/// let now = Moscow.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let range = resolve_datetime("встреча завтра в 15:00", &now, 60);
/// assert_eq!(range.start().to_rfc3339(), "2024-01-02T15:00:00+03:00");
/// assert_eq!(range.end().to_rfc3339(), "2024-01-02T16:00:00+03:00");
/// ```
pub fn resolve_datetime(
    text: &str,
    reference: &DateTime<Tz>,
    default_duration_minutes: u32,
) -> DateTimeRange {
    let date = resolve_date(text, reference)
        .unwrap_or_else(|| ParsedDate::new(reference.date_naive(), reference.timezone()));
    let time = resolve_time(text).unwrap_or(ParsedTime::DEFAULT_START);

    let start = date.at(time.to_naive_time());
    let range = DateTimeRange::starting_at(start, default_duration_minutes);
    debug!(start = %range.start, end = %range.end, "composed datetime range");
    range
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::{resolve_duration, DEFAULT_DURATION_MINUTES};
    use crate::lexicon::month_display_name;
    use chrono::{Datelike, TimeZone, Timelike};
    use chrono_tz::Europe::Moscow;
    use proptest::prelude::*;

    fn anchor() -> DateTime<Tz> {
        Moscow.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_tomorrow_at_time() {
        let range = resolve_datetime("встреча завтра в 15:00", &anchor(), DEFAULT_DURATION_MINUTES);
        assert_eq!(range.start().to_rfc3339(), "2024-01-02T15:00:00+03:00");
        assert_eq!(range.end().to_rfc3339(), "2024-01-02T16:00:00+03:00");
    }

    #[test]
    fn test_defaults_to_today_at_nine() {
        let now = Moscow.with_ymd_and_hms(2024, 6, 10, 17, 45, 0).unwrap();
        let range = resolve_datetime("просто текст", &now, 60);
        assert_eq!(range.start().to_rfc3339(), "2024-06-10T09:00:00+03:00");
        assert_eq!(range.duration_minutes(), 60);
    }

    #[test]
    fn test_time_without_date_uses_today() {
        let range = resolve_datetime("в 18:30", &anchor(), 30);
        assert_eq!(range.start().to_rfc3339(), "2024-01-01T18:30:00+03:00");
        assert_eq!(range.end().to_rfc3339(), "2024-01-01T19:00:00+03:00");
    }

    #[test]
    fn test_date_without_time_uses_nine() {
        let range = resolve_datetime("15 января 2024", &anchor(), 60);
        assert_eq!(range.start().to_rfc3339(), "2024-01-15T09:00:00+03:00");
    }

    #[test]
    fn test_explicit_duration_replaces_end() {
        let text = "созвон послезавтра в 11:00 на 1 час 30 минут";
        let range = resolve_datetime(text, &anchor(), DEFAULT_DURATION_MINUTES)
            .with_duration(resolve_duration(text));
        assert_eq!(range.start().to_rfc3339(), "2024-01-03T11:00:00+03:00");
        assert_eq!(range.end().to_rfc3339(), "2024-01-03T12:30:00+03:00");
    }

    #[test]
    fn test_zero_default_duration_gives_empty_range() {
        let range = resolve_datetime("завтра", &anchor(), 0);
        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn test_range_crosses_midnight() {
        let range = resolve_datetime("сегодня в 23:30", &anchor(), 60);
        assert_eq!(range.end().to_rfc3339(), "2024-01-02T00:30:00+03:00");
    }

    #[test]
    fn test_iso_pair() {
        let range = resolve_datetime("завтра в 10:00", &anchor(), 45);
        let (start, end) = range.to_iso_pair();
        assert_eq!(start, "2024-01-02T10:00:00+03:00");
        assert_eq!(end, "2024-01-02T10:45:00+03:00");
    }

    #[test]
    fn test_other_timezone_is_kept() {
        let tz: Tz = "Asia/Tokyo".parse().unwrap();
        let now = tz.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let range = resolve_datetime("завтра в 14:00", &now, 60);
        assert_eq!(range.start().to_rfc3339(), "2026-03-02T14:00:00+09:00");
        assert_eq!(range.start().timezone(), tz);
    }

    proptest! {
        #[test]
        fn prop_start_never_after_end(text in "\\PC{0,40}", minutes in 0u32..100_000) {
            let range = resolve_datetime(&text, &anchor(), minutes);
            prop_assert!(range.start() <= range.end());
        }

        #[test]
        fn prop_round_trip_date_and_time(
            day_offset in 0i64..3650,
            h in 0u32..24,
            m in 0u32..60,
        ) {
            let date = anchor().date_naive() + Duration::days(day_offset);
            let month = month_display_name(date.month()).unwrap();
            let text = format!("{} {month} {} в {h:02}:{m:02}", date.day(), date.year());
            let range = resolve_datetime(&text, &anchor(), 60);
            prop_assert_eq!(range.start_date(), date);
            prop_assert_eq!((range.start().hour(), range.start().minute()), (h, m));
            prop_assert_eq!(range.start_time(), NaiveTime::from_hms_opt(h, m, 0).unwrap());
        }

        #[test]
        fn prop_resolve_datetime_is_idempotent(text in "\\PC{0,40}") {
            let a = resolve_datetime(&text, &anchor(), 60);
            let b = resolve_datetime(&text, &anchor(), 60);
            prop_assert_eq!(a, b);
        }
    }
}
