//! Calendar date resolution from free Russian text.
//!
//! [`resolve_date`] tries a fixed chain of tiers and returns the first hit:
//!
//! 1. relative-day words ("сегодня", "завтра", "позавчера", ...), longest first
//! 2. weekday names and abbreviations, next occurrence strictly after today
//! 3. `<day> <month name> [<year>]` ("15 января 2024")
//! 4. numeric `<day>.<month>[.<year>]` ("15.01", "15.01.2024")
//! 5. `через N дней/дня/день`
//!
//! Keyword tiers use substring containment, not word boundaries, so a keyword
//! buried inside a longer word still matches ("встреча" contains "вс").
//! A tier whose match does not form a real calendar date yields nothing and
//! the chain moves on.

use std::sync::LazyLock;

use chrono::{
    DateTime, Datelike, Days, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone,
};
use chrono_tz::Tz;
use regex::Regex;
use tracing::debug;

use crate::lexicon::{month_number, MONTHS, RELATIVE_DAYS, WEEKDAYS};

/// A resolved calendar date in the timezone of the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    date: NaiveDate,
    tz: Tz,
}

impl ParsedDate {
    pub fn new(date: NaiveDate, tz: Tz) -> Self {
        Self { date, tz }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Local midnight of this date. If midnight falls into a DST gap the
    /// first wall-clock time after the gap is used.
    pub fn midnight(&self) -> DateTime<Tz> {
        localize(&self.tz, self.date.and_time(NaiveTime::MIN))
    }

    /// This date at `time` local wall-clock time.
    pub fn at(&self, time: NaiveTime) -> DateTime<Tz> {
        localize(&self.tz, self.date.and_time(time))
    }
}

type DateTier = fn(&str, NaiveDate) -> Option<NaiveDate>;

/// Resolution tiers in priority order.
const DATE_TIERS: &[(&str, DateTier)] = &[
    ("relative_day", try_relative_day),
    ("weekday", try_weekday),
    ("day_month_name", try_day_month_name),
    ("numeric", try_numeric_date),
    ("in_n_days", try_in_n_days),
];

/// Resolve a calendar date from `text`, relative to `reference`.
///
/// Returns `None` when no tier matches. Callers decide the fallback (usually
/// today); this function never fails.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::Europe::Moscow;
/// use russian_dates::date::resolve_date;
///
/// let now = Moscow.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// let parsed = resolve_date("созвон послезавтра", &now).unwrap();
/// assert_eq!(parsed.date().to_string(), "2024-01-03");
/// ```
pub fn resolve_date(text: &str, reference: &DateTime<Tz>) -> Option<ParsedDate> {
    let normalized = text.to_lowercase();
    let today = reference.date_naive();

    DATE_TIERS.iter().find_map(|(tier, resolve)| {
        let date = resolve(&normalized, today)?;
        debug!(tier, %date, "resolved date");
        Some(ParsedDate::new(date, reference.timezone()))
    })
}

// ── Tiers ───────────────────────────────────────────────────────────────────

/// Relative-day keywords sorted longest first so "послезавтра" beats "завтра".
static RELATIVE_BY_LENGTH: LazyLock<Vec<(&'static str, i64)>> = LazyLock::new(|| {
    let mut words = RELATIVE_DAYS.to_vec();
    words.sort_by_key(|(word, _)| std::cmp::Reverse(word.chars().count()));
    words
});

static DAY_MONTH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    let names: Vec<&str> = MONTHS.iter().map(|(name, _)| *name).collect();
    let pattern = format!(r"([0-9]{{1,2}})\s+({})(?:\s+([0-9]{{4}}))?", names.join("|"));
    Regex::new(&pattern).expect("month name pattern is valid")
});

static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})\.([0-9]{1,2})(?:\.([0-9]{4}))?").expect("numeric date pattern is valid")
});

static IN_N_DAYS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"через\s+([0-9]+)\s+(?:день|дня|дней)").expect("in-n-days pattern is valid")
});

/// "сегодня", "завтра", "послезавтра", "вчера", "позавчера".
pub(crate) fn try_relative_day(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (_, offset) = RELATIVE_BY_LENGTH
        .iter()
        .find(|(word, _)| text.contains(word))?;
    today.checked_add_signed(Duration::days(*offset))
}

/// First weekday entry contained in `text`, resolved to its next occurrence.
/// Naming today's weekday means the same weekday next week.
pub(crate) fn try_weekday(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (_, weekday) = WEEKDAYS.iter().find(|(name, _)| text.contains(name))?;
    let days_ahead = (weekday.num_days_from_monday() as i64
        - today.weekday().num_days_from_monday() as i64
        + 7)
        % 7;
    let days_ahead = if days_ahead == 0 { 7 } else { days_ahead };
    today.checked_add_signed(Duration::days(days_ahead))
}

/// "15 января", "15 января 2024".
pub(crate) fn try_day_month_name(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = DAY_MONTH_NAME.captures(text)?;
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month = month_number(caps.get(2)?.as_str())?;
    let year = match caps.get(3) {
        Some(y) => explicit_year(y.as_str())?,
        None => today.year(),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// "15.01", "15.01.2024".
pub(crate) fn try_numeric_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = NUMERIC_DATE.captures(text)?;
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let year = match caps.get(3) {
        Some(y) => explicit_year(y.as_str())?,
        None => today.year(),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// "через 3 дня", "через 1 день", "через 10 дней".
pub(crate) fn try_in_n_days(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = IN_N_DAYS.captures(text)?;
    let days: u64 = caps.get(1)?.as_str().parse().ok()?;
    today.checked_add_days(Days::new(days))
}

// ── Helpers ─────────────────────────────────────────────────────────────────

/// A written year; there is no year 0 in the calendar users write.
fn explicit_year(digits: &str) -> Option<i32> {
    digits.parse().ok().filter(|year: &i32| *year >= 1)
}

/// Attach a local wall-clock time to `tz` without failing.
///
/// Ambiguous times (DST fall-back) take the earlier instant. Nonexistent
/// times (DST spring-forward gap) are read with the offset in force before
/// the gap, which lands just past the transition.
pub(crate) fn localize(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let before = naive.checked_sub_signed(Duration::days(1)).unwrap_or(naive);
            let offset = tz.offset_from_utc_datetime(&before).fix();
            let utc = naive
                .checked_sub_signed(Duration::seconds(offset.local_minus_utc() as i64))
                .unwrap_or(naive);
            tz.from_utc_datetime(&utc)
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
