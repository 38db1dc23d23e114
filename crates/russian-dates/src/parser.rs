//! A long-lived parser handle bound to one timezone.
//!
//! Command handlers construct a [`DateParser`] once at startup and pass it
//! around by reference. The handle never reads the clock: each call takes
//! the UTC "now" from the caller and anchors it in the configured zone.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::compose::{resolve_datetime, DateTimeRange};
use crate::date::{resolve_date, ParsedDate};
use crate::duration::{resolve_duration, DEFAULT_DURATION_MINUTES};
use crate::error::{DateParseError, Result};
use crate::time::{resolve_time, ParsedTime};

/// Deployment timezone used when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Europe/Moscow";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParser {
    tz: Tz,
}

impl Default for DateParser {
    fn default() -> Self {
        Self::new(chrono_tz::Europe::Moscow)
    }
}

impl DateParser {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Build a parser from an IANA timezone name.
    ///
    /// # Errors
    ///
    /// Returns [`DateParseError::InvalidTimezone`] for an unknown name.
    pub fn from_timezone_name(name: &str) -> Result<Self> {
        parse_timezone(name).map(Self::new)
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// The reference instant for `now` in the configured timezone.
    pub fn anchor(&self, now: DateTime<Utc>) -> DateTime<Tz> {
        now.with_timezone(&self.tz)
    }

    pub fn parse_date(&self, text: &str, now: DateTime<Utc>) -> Option<ParsedDate> {
        resolve_date(text, &self.anchor(now))
    }

    pub fn parse_time(&self, text: &str) -> Option<ParsedTime> {
        resolve_time(text)
    }

    pub fn parse_duration(&self, text: &str) -> u32 {
        resolve_duration(text)
    }

    /// Start/end with the default 60-minute length.
    pub fn parse_datetime(&self, text: &str, now: DateTime<Utc>) -> DateTimeRange {
        resolve_datetime(text, &self.anchor(now), DEFAULT_DURATION_MINUTES)
    }
}

/// Parse an IANA timezone string into `Tz`.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| DateParseError::InvalidTimezone(format!("'{}'", s)))
}

/// Parse an RFC 3339 datetime string into `DateTime<Utc>`.
pub fn parse_rfc3339(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DateParseError::InvalidDatetime(format!("'{}': {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        // 2024-01-01T22:30:00Z is already January 2 in Moscow
        Utc.with_ymd_and_hms(2024, 1, 1, 22, 30, 0).unwrap()
    }

    #[test]
    fn test_default_is_moscow() {
        let parser = DateParser::default();
        assert_eq!(parser.timezone().name(), DEFAULT_TIMEZONE);
    }

    #[test]
    fn test_anchor_converts_to_local() {
        let parser = DateParser::default();
        assert_eq!(parser.anchor(now()).to_rfc3339(), "2024-01-02T01:30:00+03:00");
    }

    #[test]
    fn test_parse_date_uses_local_today() {
        let parser = DateParser::default();
        let parsed = parser.parse_date("завтра", now()).unwrap();
        assert_eq!(parsed.date().to_string(), "2024-01-03");
    }

    #[test]
    fn test_parse_datetime_default_length() {
        let parser = DateParser::default();
        let range = parser.parse_datetime("в 12:00", now());
        assert_eq!(range.start().to_rfc3339(), "2024-01-02T12:00:00+03:00");
        assert_eq!(range.duration_minutes(), 60);
    }

    #[test]
    fn test_parse_time_and_duration_delegate() {
        let parser = DateParser::default();
        assert_eq!(parser.parse_time("10:30").map(|t| t.hour()), Some(10));
        assert_eq!(parser.parse_duration("на 2 часа"), 120);
    }

    #[test]
    fn test_from_timezone_name() {
        let parser = DateParser::from_timezone_name("Asia/Yekaterinburg").unwrap();
        assert_eq!(parser.anchor(now()).to_rfc3339(), "2024-01-02T03:30:00+05:00");
    }

    #[test]
    fn test_invalid_timezone_returns_error() {
        let err = DateParser::from_timezone_name("Mars/Olympus").unwrap_err();
        assert!(err.to_string().contains("Invalid timezone"), "got: {err}");
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_rfc3339("2024-01-01T00:00:00+03:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 12, 31, 21, 0, 0).unwrap());
        let err = parse_rfc3339("вчера").unwrap_err();
        assert!(err.to_string().contains("Invalid datetime"), "got: {err}");
    }
}
