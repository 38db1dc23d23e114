//! Time-of-day resolution from free Russian text.
//!
//! Two alternatives are tried in order: a clock pattern (`10:30`, `10-30`,
//! `10.30`) and an hour word (`10 часов`, `3 часа 15`). An out-of-range
//! match counts as no match for that alternative.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use tracing::debug;

/// An hour/minute pair, always within 0..24 and 0..60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTime {
    hour: u32,
    minute: u32,
}

impl ParsedTime {
    /// Start time used when a message names no time.
    pub const DEFAULT_START: ParsedTime = ParsedTime { hour: 9, minute: 0 };

    /// Validated constructor; `None` for an hour ≥ 24 or minute ≥ 60.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn to_naive_time(self) -> NaiveTime {
        // Range is checked in `new`.
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

type TimeTier = fn(&str) -> Option<ParsedTime>;

const TIME_TIERS: &[(&str, TimeTier)] = &[("clock", try_clock_time), ("hour_word", try_hour_word)];

static CLOCK_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})[:.\-]([0-9]{2})").expect("clock time pattern is valid")
});

static HOUR_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})\s*(?:часов|часа|час)(?:\s*([0-9]{1,2}))?")
        .expect("hour word pattern is valid")
});

/// Resolve an hour/minute pair from `text`.
///
/// # Examples
///
/// ```
/// use russian_dates::time::resolve_time;
///
/// let t = resolve_time("в 10:30").unwrap();
/// assert_eq!((t.hour(), t.minute()), (10, 30));
/// assert!(resolve_time("25:00").is_none());
/// ```
pub fn resolve_time(text: &str) -> Option<ParsedTime> {
    let normalized = text.to_lowercase();
    TIME_TIERS.iter().find_map(|(tier, resolve)| {
        let time = resolve(&normalized)?;
        debug!(tier, hour = time.hour, minute = time.minute, "resolved time");
        Some(time)
    })
}

/// "10:30", "10-30", "10.30".
fn try_clock_time(text: &str) -> Option<ParsedTime> {
    let caps = CLOCK_TIME.captures(text)?;
    let hour = caps.get(1)?.as_str().parse().ok()?;
    let minute = caps.get(2)?.as_str().parse().ok()?;
    ParsedTime::new(hour, minute)
}

/// "10 часов", "3 часа 15", "1час".
fn try_hour_word(text: &str) -> Option<ParsedTime> {
    let caps = HOUR_WORD.captures(text)?;
    let hour = caps.get(1)?.as_str().parse().ok()?;
    let minute = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    ParsedTime::new(hour, minute)
}
