//! Lunar calendar collaborator contract.
//!
//! Gregorian-to-lunar conversion is delegated to an implementation of
//! [`LunarCalendar`]. Labels come back as the collaborator's raw two-character
//! strings and are validated here before they reach the analysis.

use liuren_base::{MAX_LUNAR_DAY, MAX_LUNAR_MONTH, Sexagenary};
use serde::Serialize;

use crate::datetime::GregorianDateTime;
use crate::error::CalendarError;

/// Lunar date as reported by a calendar collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    pub year: i32,
    /// Lunar month (1–12).
    pub month: u32,
    /// Lunar day (1–30).
    pub day: u32,
    /// Whether the month is an intercalary (閏) month.
    pub leap_month: bool,
    /// Year label such as `甲辰`.
    pub year_label: Option<String>,
    /// Month label such as `乙亥`, if the collaborator knows it.
    pub month_label: Option<String>,
    /// Day label such as `甲子`, if the collaborator knows it.
    pub day_label: Option<String>,
    /// Zodiac animal of the year.
    pub zodiac: Option<String>,
}

impl LunarDate {
    /// Check the month/day ranges the collaborator promises.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if !(1..=MAX_LUNAR_MONTH).contains(&self.month) || !(1..=MAX_LUNAR_DAY).contains(&self.day)
        {
            return Err(CalendarError::Conversion(format!(
                "lunar date out of range: month {} day {}",
                self.month, self.day
            )));
        }
        Ok(())
    }

    /// Parsed year label.
    pub fn year_sexagenary(&self) -> Result<Option<Sexagenary>, CalendarError> {
        parse_label(self.year_label.as_deref())
    }

    /// Parsed month label.
    pub fn month_sexagenary(&self) -> Result<Option<Sexagenary>, CalendarError> {
        parse_label(self.month_label.as_deref())
    }

    /// Parsed day label.
    pub fn day_sexagenary(&self) -> Result<Option<Sexagenary>, CalendarError> {
        parse_label(self.day_label.as_deref())
    }
}

fn parse_label(label: Option<&str>) -> Result<Option<Sexagenary>, CalendarError> {
    label
        .map(Sexagenary::parse)
        .transpose()
        .map_err(CalendarError::from)
}

/// Converts Gregorian dates to lunar dates.
pub trait LunarCalendar {
    /// Lunar date for the Gregorian date of `datetime`.
    fn lunar_date(&self, datetime: &GregorianDateTime) -> Result<LunarDate, CalendarError>;
}

impl<C: LunarCalendar + ?Sized> LunarCalendar for &C {
    fn lunar_date(&self, datetime: &GregorianDateTime) -> Result<LunarDate, CalendarError> {
        (**self).lunar_date(datetime)
    }
}

#[cfg(test)]
mod tests {
    use liuren_base::LiurenError;

    use super::*;

    fn sample() -> LunarDate {
        LunarDate {
            year: 2024,
            month: 10,
            day: 7,
            leap_month: false,
            year_label: Some("甲辰".into()),
            month_label: Some("甲戌".into()),
            day_label: Some("己未".into()),
            zodiac: Some("龍".into()),
        }
    }

    #[test]
    fn labels_parse() {
        let d = sample();
        assert_eq!(d.year_sexagenary().unwrap().unwrap().to_string(), "甲辰");
        assert_eq!(d.month_sexagenary().unwrap().unwrap().to_string(), "甲戌");
        assert_eq!(d.day_sexagenary().unwrap().unwrap().to_string(), "己未");
    }

    #[test]
    fn missing_label_is_none() {
        let d = LunarDate {
            month_label: None,
            ..sample()
        };
        assert_eq!(d.month_sexagenary(), Ok(None));
    }

    #[test]
    fn malformed_label_rejected() {
        let d = LunarDate {
            day_label: Some("己".into()),
            ..sample()
        };
        assert_eq!(
            d.day_sexagenary(),
            Err(CalendarError::Label(LiurenError::MalformedCalendarLabel(
                "己".into()
            )))
        );
    }

    #[test]
    fn range_validation() {
        assert!(sample().validate().is_ok());
        let bad = LunarDate {
            day: 31,
            ..sample()
        };
        assert!(matches!(bad.validate(), Err(CalendarError::Conversion(_))));
    }
}
