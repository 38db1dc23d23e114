use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser, Subcommand};
use russian_dates::{
    interpret, parse_rfc3339, parse_task_command, resolve_datetime, DateParser, DEFAULT_TIMEZONE,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod output;

use output::{
    DateOutput, DurationOutput, RangeOutput, RequestOutput, TaskOutput, TimeOutput, NOT_FOUND,
};

#[derive(Parser)]
#[command(
    name = "rudate",
    version,
    about = "Resolve Russian date, time, and duration phrases"
)]
struct Cli {
    /// IANA timezone the phrases are resolved in
    #[arg(long, global = true, env = "RUDATE_TZ", default_value = DEFAULT_TIMEZONE)]
    tz: String,
    /// Reference "now" as RFC 3339 (defaults to the current time)
    #[arg(long, global = true)]
    now: Option<String>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Log resolver decisions to stderr
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a calendar date ("завтра", "15 января", "через 3 дня")
    Date {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Resolve a time of day ("10:30", "в 3 часа 15")
    Time {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Resolve a duration in minutes ("1 час 30 минут")
    Duration {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Resolve a start/end range ("встреча завтра в 15:00")
    Datetime {
        /// Length of the range in minutes
        #[arg(long, default_value_t = russian_dates::DEFAULT_DURATION_MINUTES)]
        duration: u32,
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Interpret a chat message as a calendar request
    Interpret {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Parse a task command ("Название | дата | время")
    Task {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let parser = DateParser::from_timezone_name(&cli.tz).context("bad --tz / RUDATE_TZ")?;
    let now = reference_now(cli.now.as_deref())?;
    let anchor = parser.anchor(now);
    debug!(timezone = parser.timezone().name(), %anchor, "reference instant");

    match cli.command {
        Command::Date { text } => {
            let out = DateOutput::new(parser.parse_date(&text.join(" "), now), parser.timezone());
            emit(cli.json, &out, out.human())
        }
        Command::Time { text } => {
            let out = TimeOutput::new(parser.parse_time(&text.join(" ")));
            emit(cli.json, &out, out.human())
        }
        Command::Duration { text } => {
            let out = DurationOutput {
                minutes: parser.parse_duration(&text.join(" ")),
            };
            emit(cli.json, &out, out.human())
        }
        Command::Datetime { duration, text } => {
            let range = resolve_datetime(&text.join(" "), &anchor, duration);
            let out = RangeOutput::new(&range);
            emit(cli.json, &out, out.human())
        }
        Command::Interpret { text } => {
            let out = RequestOutput::from(interpret(&text.join(" "), &anchor));
            emit(cli.json, &out, out.human())
        }
        Command::Task { text } => {
            let out = parse_task_command(&text.join(" "), &anchor).map(TaskOutput::from);
            let human = out
                .as_ref()
                .map(TaskOutput::human)
                .unwrap_or_else(|| NOT_FOUND.to_string());
            emit(cli.json, &out, human)
        }
    }
}

/// `--now` if given, otherwise the system clock.
fn reference_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => parse_rfc3339(s).context("bad --now"),
        None => Ok(Utc::now()),
    }
}

fn init_logging(verbose: u8) {
    let filter = if verbose > 0 {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit<T: Serialize>(json: bool, value: &T, human: String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{human}");
    }
    Ok(())
}
