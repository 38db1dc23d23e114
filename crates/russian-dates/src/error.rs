//! Error types for russian-dates configuration.
//!
//! Resolution itself never fails: a phrase that matches nothing is a `None`,
//! not an error. Only setting up a parser (timezone, anchor instant) can go
//! wrong.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),
}

pub type Result<T> = std::result::Result<T, DateParseError>;
