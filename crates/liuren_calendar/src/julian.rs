//! Proleptic Gregorian calendar arithmetic and Julian Day Numbers.

/// Earliest supported year.
pub const MIN_YEAR: i32 = 1;
/// Latest supported year.
pub const MAX_YEAR: i32 = 9999;

pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month, or 0 for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Julian Day Number of a Gregorian calendar date (the day starting at noon).
///
/// Fliegel–Van Flandern integer form; valid for any year >= -4800.
pub const fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_day() {
        assert_eq!(gregorian_to_jdn(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn gregorian_reform_boundary() {
        // 1582-10-15 is JDN 2299161
        assert_eq!(gregorian_to_jdn(1582, 10, 15), 2_299_161);
    }

    #[test]
    fn consecutive_days() {
        assert_eq!(
            gregorian_to_jdn(2024, 3, 1) - gregorian_to_jdn(2024, 2, 28),
            2
        );
        assert_eq!(
            gregorian_to_jdn(2023, 3, 1) - gregorian_to_jdn(2023, 2, 28),
            1
        );
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 13), 0);
    }
}
