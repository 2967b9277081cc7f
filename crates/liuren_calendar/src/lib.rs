//! Calendar input for Six-Ren divination.
//!
//! This crate provides:
//! - Validated Gregorian date/time input
//! - Julian Day Numbers and Gregorian month lengths
//! - The [`LunarCalendar`] collaborator trait and its [`LunarDate`] result
//! - [`GregorianApproximation`], a table-free stand-in collaborator

pub mod approximation;
pub mod datetime;
pub mod error;
pub mod julian;
pub mod lunar;

pub use approximation::{GregorianApproximation, day_sexagenary, year_sexagenary};
pub use datetime::GregorianDateTime;
pub use error::CalendarError;
pub use julian::{days_in_month, gregorian_to_jdn, is_leap_year};
pub use lunar::{LunarCalendar, LunarDate};
