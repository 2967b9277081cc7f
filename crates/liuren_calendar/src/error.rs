//! Error types for calendar input and lunar conversion.

use liuren_base::LiurenError;
use thiserror::Error;

/// Errors from Gregorian input validation or the lunar collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Year/month/day does not name a real Gregorian date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Clock time outside 00:00–23:59.
    #[error("invalid time: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    /// Text input could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
    /// The lunar collaborator could not convert the date.
    #[error("lunar conversion failed: {0}")]
    Conversion(String),
    /// A label returned by the collaborator was rejected.
    #[error(transparent)]
    Label(#[from] LiurenError),
}
