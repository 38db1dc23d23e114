//! Interpretation of a free-text chat message into a calendar or task request.
//!
//! Everything here is pure: the result describes what to ask the calendar
//! or task backend for, but nothing is sent anywhere.

use std::sync::LazyLock;

use chrono::{DateTime, Days, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use regex::Regex;
use tracing::debug;

use crate::compose::{resolve_datetime, DateTimeRange};
use crate::date::resolve_date;
use crate::duration::{resolve_duration, DEFAULT_DURATION_MINUTES};

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ShowEvents,
    CreateEvent,
    DeleteEvent,
    UpdateEvent,
    Unknown,
}

/// Keyword groups, checked in this order. Delete and update verbs go first
/// so that "удали событие ..." is not taken for a create request.
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::DeleteEvent, &["удали", "удалить", "убери", "убрать"]),
    (
        Intent::UpdateEvent,
        &["перенеси", "перенести", "измени", "изменить"],
    ),
    (
        Intent::ShowEvents,
        &["покажи", "показать", "события", "что", "список"],
    ),
    (
        Intent::CreateEvent,
        &[
            "создай",
            "создать",
            "назначь",
            "назначить",
            "добавь",
            "добавить",
            "встреча",
            "событие",
        ],
    ),
];

/// Words stripped from a create request before its title is taken.
const TITLE_NOISE: &[&str] = &[
    "создай",
    "создать",
    "назначь",
    "назначить",
    "добавь",
    "добавить",
    "событие",
    "встречу",
    "встреча",
];

const DEFAULT_TITLE: &str = "Новое событие";
const MAX_TITLE_WORDS: usize = 5;

/// Tasks only carry a date; the due instant is pinned to local noon.
const TASK_DUE_HOUR: u32 = 12;

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]([^'"]+)['"]"#).expect("quoted title pattern is valid"));

static EVENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9_-]{20,}").expect("event id pattern is valid"));

/// A structured request derived from a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// List events between two dates, inclusive.
    ShowEvents {
        from: NaiveDate,
        to: NaiveDate,
        label: String,
    },
    CreateEvent {
        title: String,
        range: DateTimeRange,
        duration_minutes: u32,
    },
    DeleteEvent {
        event_id: Option<String>,
    },
    UpdateEvent {
        event_id: Option<String>,
        range: DateTimeRange,
    },
    Unknown,
}

/// A task to create: "Название | дата | время".
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub due: Option<DateTime<Tz>>,
    /// A time part was given, but tasks only keep the date.
    pub time_ignored: bool,
}

/// Classify a message by keyword.
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    let intent = INTENT_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lowered.contains(w)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Unknown);
    debug!(?intent, "classified message");
    intent
}

/// The event title: the first quoted fragment, otherwise the first few words
/// left after removing command words.
pub fn extract_title(text: &str) -> String {
    if let Some(quoted) = QUOTED.captures(text).and_then(|c| c.get(1)) {
        return quoted.as_str().to_string();
    }

    let mut cleaned = text.to_lowercase();
    for word in TITLE_NOISE {
        cleaned = cleaned.replace(word, "");
    }
    let words: Vec<&str> = cleaned.split_whitespace().take(MAX_TITLE_WORDS).collect();
    if words.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        words.join(" ")
    }
}

/// The first run of at least 20 id characters (`[A-Za-z0-9_-]`).
pub fn extract_event_id(text: &str) -> Option<String> {
    EVENT_ID.find(text).map(|m| m.as_str().to_string())
}

/// Whether the message asks for a week rather than a single day.
pub fn wants_week_view(text: &str) -> bool {
    text.to_lowercase().contains("недел")
}

/// Heading for a day relative to the reference date.
pub fn date_label(date: NaiveDate, reference: &DateTime<Tz>) -> String {
    match (date - reference.date_naive()).num_days() {
        0 => "Сегодня".to_string(),
        1 => "Завтра".to_string(),
        -1 => "Вчера".to_string(),
        2 => "Послезавтра".to_string(),
        -2 => "Позавчера".to_string(),
        _ => date.format("%d.%m.%Y").to_string(),
    }
}

/// Turn a message into a [`Request`].
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::Europe::Moscow;
/// use russian_dates::intent::{interpret, Request};
///
/// let now = Moscow.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// match interpret("Создай 'Планёрка' завтра в 10:00 на 30 минут", &now) {
///     Request::CreateEvent { title, range, duration_minutes } => {
///         assert_eq!(title, "Планёрка");
///         assert_eq!(duration_minutes, 30);
///         assert_eq!(range.start().to_rfc3339(), "2024-01-02T10:00:00+03:00");
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn interpret(text: &str, reference: &DateTime<Tz>) -> Request {
    match classify(text) {
        Intent::ShowEvents => {
            let from = resolve_date(text, reference)
                .map(|d| d.date())
                .unwrap_or_else(|| reference.date_naive());
            if wants_week_view(text) {
                let to = from.checked_add_days(Days::new(7)).unwrap_or(from);
                Request::ShowEvents {
                    from,
                    to,
                    label: "На неделю".to_string(),
                }
            } else {
                Request::ShowEvents {
                    from,
                    to: from,
                    label: date_label(from, reference),
                }
            }
        }
        Intent::CreateEvent => {
            let duration_minutes = resolve_duration(text);
            let range = resolve_datetime(text, reference, DEFAULT_DURATION_MINUTES)
                .with_duration(duration_minutes);
            Request::CreateEvent {
                title: extract_title(text),
                range,
                duration_minutes,
            }
        }
        Intent::DeleteEvent => Request::DeleteEvent {
            event_id: extract_event_id(text),
        },
        Intent::UpdateEvent => Request::UpdateEvent {
            event_id: extract_event_id(text),
            range: resolve_datetime(text, reference, DEFAULT_DURATION_MINUTES),
        },
        Intent::Unknown => Request::Unknown,
    }
}

/// Parse "Название | дата | время", with or without a leading
/// `/create_task`. Returns `None` when the title is empty.
pub fn parse_task_command(text: &str, reference: &DateTime<Tz>) -> Option<TaskDraft> {
    let body = text.trim();
    let body = body.strip_prefix("/create_task").unwrap_or(body);
    let parts: Vec<&str> = body.split('|').map(str::trim).collect();

    let title = parts.first().copied().filter(|t| !t.is_empty())?;
    let due = parts
        .get(1)
        .and_then(|date_text| resolve_date(date_text, reference))
        .map(|date| date.at(NaiveTime::from_hms_opt(TASK_DUE_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)));
    debug!(title, due = ?due, "parsed task command");

    Some(TaskDraft {
        title: title.to_string(),
        due,
        time_ignored: parts.len() > 2,
    })
}
