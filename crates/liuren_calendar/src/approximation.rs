//! Stand-in collaborator that needs no lunar tables.
//!
//! The Gregorian month and day are reused as the lunar month and day. The day
//! label is exact: sexagenary days run continuously, and JDN 2433191
//! (1949-10-01) is a 甲子 day. The year label counts from the Gregorian year
//! (4 CE = 甲子) and so changes on January 1 rather than at the lunar new
//! year. No month label is produced, because that needs solar terms.

use liuren_base::{MAX_LUNAR_DAY, Sexagenary};
use tracing::debug;

use crate::datetime::GregorianDateTime;
use crate::error::CalendarError;
use crate::julian::gregorian_to_jdn;
use crate::lunar::{LunarCalendar, LunarDate};

/// Offset that maps a JDN onto the 60-day cycle (0 = 甲子).
const JDN_SEXAGENARY_OFFSET: i64 = 49;

/// Sexagenary label of a Gregorian day.
pub const fn day_sexagenary(year: i32, month: u32, day: u32) -> Sexagenary {
    let jdn = gregorian_to_jdn(year, month, day);
    Sexagenary::from_index((jdn + JDN_SEXAGENARY_OFFSET).rem_euclid(60) as u32)
}

/// Sexagenary label of a year counted from 4 CE (甲子).
pub const fn year_sexagenary(year: i32) -> Sexagenary {
    Sexagenary::from_index((year - 4).rem_euclid(60) as u32)
}

/// Collaborator that treats the Gregorian month/day as lunar month/day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GregorianApproximation;

impl LunarCalendar for GregorianApproximation {
    fn lunar_date(&self, datetime: &GregorianDateTime) -> Result<LunarDate, CalendarError> {
        let day = if datetime.day > MAX_LUNAR_DAY {
            debug!(day = datetime.day, "clamping day 31 to lunar day 30");
            MAX_LUNAR_DAY
        } else {
            datetime.day
        };
        let year_label = year_sexagenary(datetime.year);
        let day_label = day_sexagenary(datetime.year, datetime.month, datetime.day);
        Ok(LunarDate {
            year: datetime.year,
            month: datetime.month,
            day,
            leap_month: false,
            year_label: Some(year_label.to_string()),
            month_label: None,
            day_label: Some(day_label.to_string()),
            zodiac: Some(year_label.branch.zodiac().to_owned()),
        })
    }
}
