//! # russian-dates
//!
//! Deterministic resolution of informal Russian date and time phrases for a
//! calendar and to-do chat bot.
//!
//! Every resolver is a pure function of the message text and a caller-supplied
//! reference instant. Nothing reads the system clock, and "nothing matched" is
//! an ordinary `None` (or a default), never an error.
//!
//! ## Modules
//!
//! - [`lexicon`] — weekday, relative-day, and month word tables
//! - [`date`] — "завтра", "в пятницу", "15 января", "20.01", "через 3 дня" → calendar date
//! - [`time`] — "10:30", "в 3 часа 15" → hour/minute
//! - [`duration`] — "1 час 30 минут" → minutes
//! - [`compose`] — date + time + length → start/end range
//! - [`parser`] — timezone-bound parser handle and configuration parsing
//! - [`intent`] — message → show/create/delete/update request, task commands
//! - [`format`] — Russian display strings for dates
//! - [`error`] — Error types

pub mod compose;
pub mod date;
pub mod duration;
pub mod error;
pub mod format;
pub mod intent;
pub mod lexicon;
pub mod parser;
pub mod time;

pub use compose::{resolve_datetime, DateTimeRange};
pub use date::{resolve_date, ParsedDate};
pub use duration::{resolve_duration, DEFAULT_DURATION_MINUTES};
pub use error::DateParseError;
pub use format::{format_date_range, format_datetime_ru};
pub use intent::{
    classify, date_label, extract_event_id, extract_title, interpret, parse_task_command,
    wants_week_view, Intent, Request, TaskDraft,
};
pub use parser::{parse_rfc3339, parse_timezone, DateParser, DEFAULT_TIMEZONE};
pub use time::{resolve_time, ParsedTime};
