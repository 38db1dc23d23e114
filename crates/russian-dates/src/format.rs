//! Russian display formatting for resolved dates.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::lexicon::month_display_name;

/// "15 января 2024, 10:00".
pub fn format_datetime_ru<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    let month = month_display_name(dt.month()).unwrap_or_default();
    format!("{} {} {}, {}", dt.day(), month, dt.year(), dt.format("%H:%M"))
}

/// "15.01.2024" for a single day, "15.01.2024 - 22.01.2024" otherwise.
pub fn format_date_range(from: NaiveDate, to: NaiveDate) -> String {
    if from == to {
        from.format("%d.%m.%Y").to_string()
    } else {
        format!("{} - {}", from.format("%d.%m.%Y"), to.format("%d.%m.%Y"))
    }
}
