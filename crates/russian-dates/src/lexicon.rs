//! Static Russian word tables used by the resolvers.
//!
//! Tables are ordered slices: where several entries can match the same text,
//! the resolvers rely on this order.

use chrono::Weekday;

/// Relative-day words and their day offset from the reference date.
pub const RELATIVE_DAYS: &[(&str, i64)] = &[
    ("сегодня", 0),
    ("завтра", 1),
    ("послезавтра", 2),
    ("вчера", -1),
    ("позавчера", -2),
];

/// Weekday names and two-letter abbreviations, Monday first.
pub const WEEKDAYS: &[(&str, Weekday)] = &[
    ("понедельник", Weekday::Mon),
    ("пн", Weekday::Mon),
    ("вторник", Weekday::Tue),
    ("вт", Weekday::Tue),
    ("среда", Weekday::Wed),
    ("ср", Weekday::Wed),
    ("четверг", Weekday::Thu),
    ("чт", Weekday::Thu),
    ("пятница", Weekday::Fri),
    ("пт", Weekday::Fri),
    ("суббота", Weekday::Sat),
    ("сб", Weekday::Sat),
    ("воскресенье", Weekday::Sun),
    ("вс", Weekday::Sun),
];

/// Month names in genitive ("января") and nominative ("январь") form.
pub const MONTHS: &[(&str, u32)] = &[
    ("января", 1),
    ("январь", 1),
    ("февраля", 2),
    ("февраль", 2),
    ("марта", 3),
    ("март", 3),
    ("апреля", 4),
    ("апрель", 4),
    ("мая", 5),
    ("май", 5),
    ("июня", 6),
    ("июнь", 6),
    ("июля", 7),
    ("июль", 7),
    ("августа", 8),
    ("август", 8),
    ("сентября", 9),
    ("сентябрь", 9),
    ("октября", 10),
    ("октябрь", 10),
    ("ноября", 11),
    ("ноябрь", 11),
    ("декабря", 12),
    ("декабрь", 12),
];

/// Genitive month names for display, January first.
pub const MONTH_NAMES_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];

/// Month number (1-12) for a lowercase month name.
pub fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(word, _)| *word == name)
        .map(|&(_, month)| month)
}

/// Genitive display name for a month number, if in range.
pub fn month_display_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES_GENITIVE.get(idx).copied()
}
