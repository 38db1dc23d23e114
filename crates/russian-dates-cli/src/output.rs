//! Serializable views of resolver results, shared by human and JSON output.

use chrono_tz::Tz;
use russian_dates::{
    format_date_range, format_datetime_ru, DateTimeRange, ParsedDate, ParsedTime, Request,
    TaskDraft,
};
use serde::Serialize;

/// Printed in place of a value that was not found.
pub const NOT_FOUND: &str = "не найдено";

#[derive(Debug, Serialize)]
pub struct DateOutput {
    pub date: Option<String>,
    pub midnight: Option<String>,
    pub timezone: String,
}

impl DateOutput {
    pub fn new(parsed: Option<ParsedDate>, tz: Tz) -> Self {
        Self {
            date: parsed.map(|p| p.date().format("%Y-%m-%d").to_string()),
            midnight: parsed.map(|p| p.midnight().to_rfc3339()),
            timezone: tz.name().to_string(),
        }
    }

    pub fn human(&self) -> String {
        self.date.clone().unwrap_or_else(|| NOT_FOUND.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct TimeOutput {
    pub hour: Option<u32>,
    pub minute: Option<u32>,
}

impl TimeOutput {
    pub fn new(parsed: Option<ParsedTime>) -> Self {
        Self {
            hour: parsed.map(|t| t.hour()),
            minute: parsed.map(|t| t.minute()),
        }
    }

    pub fn human(&self) -> String {
        match (self.hour, self.minute) {
            (Some(h), Some(m)) => format!("{h:02}:{m:02}"),
            _ => NOT_FOUND.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DurationOutput {
    pub minutes: u32,
}

impl DurationOutput {
    pub fn human(&self) -> String {
        format!("{} мин", self.minutes)
    }
}

#[derive(Debug, Serialize)]
pub struct RangeOutput {
    pub start: String,
    pub end: String,
    pub duration_minutes: i64,
    pub display: String,
}

impl RangeOutput {
    pub fn new(range: &DateTimeRange) -> Self {
        let (start, end) = range.to_iso_pair();
        Self {
            start,
            end,
            duration_minutes: range.duration_minutes(),
            display: format_datetime_ru(&range.start()),
        }
    }

    pub fn human(&self) -> String {
        format!("{} - {} ({} мин)", self.start, self.end, self.duration_minutes)
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum RequestOutput {
    ShowEvents {
        from: String,
        to: String,
        label: String,
        display: String,
    },
    CreateEvent {
        title: String,
        start: String,
        end: String,
        duration_minutes: u32,
    },
    DeleteEvent {
        event_id: Option<String>,
    },
    UpdateEvent {
        event_id: Option<String>,
        start: String,
        end: String,
    },
    Unknown,
}

impl From<Request> for RequestOutput {
    fn from(request: Request) -> Self {
        match request {
            Request::ShowEvents { from, to, label } => RequestOutput::ShowEvents {
                from: from.format("%Y-%m-%d").to_string(),
                to: to.format("%Y-%m-%d").to_string(),
                label,
                display: format_date_range(from, to),
            },
            Request::CreateEvent {
                title,
                range,
                duration_minutes,
            } => {
                let (start, end) = range.to_iso_pair();
                RequestOutput::CreateEvent {
                    title,
                    start,
                    end,
                    duration_minutes,
                }
            }
            Request::DeleteEvent { event_id } => RequestOutput::DeleteEvent { event_id },
            Request::UpdateEvent { event_id, range } => {
                let (start, end) = range.to_iso_pair();
                RequestOutput::UpdateEvent {
                    event_id,
                    start,
                    end,
                }
            }
            Request::Unknown => RequestOutput::Unknown,
        }
    }
}

impl RequestOutput {
    pub fn human(&self) -> String {
        let id = |event_id: &Option<String>| {
            event_id
                .clone()
                .unwrap_or_else(|| "ID не указан".to_string())
        };
        match self {
            RequestOutput::ShowEvents { label, display, .. } => {
                format!("показать события: {label} ({display})")
            }
            RequestOutput::CreateEvent {
                title,
                start,
                end,
                duration_minutes,
            } => format!("создать событие '{title}': {start} - {end} ({duration_minutes} мин)"),
            RequestOutput::DeleteEvent { event_id } => {
                format!("удалить событие: {}", id(event_id))
            }
            RequestOutput::UpdateEvent {
                event_id,
                start,
                end,
            } => format!("перенести событие {}: {start} - {end}", id(event_id)),
            RequestOutput::Unknown => "команда не распознана".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskOutput {
    pub title: String,
    pub due: Option<String>,
    pub time_ignored: bool,
}

impl From<TaskDraft> for TaskOutput {
    fn from(draft: TaskDraft) -> Self {
        Self {
            title: draft.title,
            due: draft.due.map(|d| d.to_rfc3339()),
            time_ignored: draft.time_ignored,
        }
    }
}

impl TaskOutput {
    pub fn human(&self) -> String {
        let due = self.due.as_deref().unwrap_or("без срока");
        let mut line = format!("задача '{}': {due}", self.title);
        if self.time_ignored {
            line.push_str(" (время не сохраняется)");
        }
        line
    }
}
