//! Validated Gregorian date and clock time.

use serde::Serialize;

use crate::error::CalendarError;
use crate::julian::{MAX_YEAR, MIN_YEAR, days_in_month};

/// Gregorian calendar date with hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GregorianDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl GregorianDateTime {
    /// Build a date-time, rejecting impossible dates and times.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) || day == 0 || day > days_in_month(year, month)
        {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        if hour > 23 || minute > 59 {
            return Err(CalendarError::InvalidTime { hour, minute });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Parse `YYYY-MM-DD` and `hh:mm` (or `hh:mm:ss`, seconds ignored).
    pub fn parse(date: &str, time: &str) -> Result<Self, CalendarError> {
        let date_parts: Vec<&str> = date.trim().split('-').collect();
        if date_parts.len() != 3 {
            return Err(CalendarError::Parse(format!(
                "expected YYYY-MM-DD, got {date}"
            )));
        }
        let time_parts: Vec<&str> = time.trim().split(':').collect();
        if !(2..=3).contains(&time_parts.len()) {
            return Err(CalendarError::Parse(format!("expected hh:mm, got {time}")));
        }
        let year: i32 = parse_field(date_parts[0], "year")?;
        let month: u32 = parse_field(date_parts[1], "month")?;
        let day: u32 = parse_field(date_parts[2], "day")?;
        let hour: u32 = parse_field(time_parts[0], "hour")?;
        let minute: u32 = parse_field(time_parts[1], "minute")?;
        Self::new(year, month, day, hour, minute)
    }
}

fn parse_field<T: std::str::FromStr>(s: &str, what: &str) -> Result<T, CalendarError>
where
    T::Err: std::fmt::Display,
{
    s.parse()
        .map_err(|e| CalendarError::Parse(format!("{what} {s:?}: {e}")))
}

impl std::fmt::Display for GregorianDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
