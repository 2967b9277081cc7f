//! Convenience wrapper for Small Six-Ren divination.
//!
//! Runs stepping and the five-element reading in one call, starting from
//! either lunar inputs or a Gregorian date-time plus a lunar calendar
//! collaborator.
//!
//! # Quick start
//!
//! ```rust
//! use liuren_rs::*;
//!
//! let request = DivinationRequest::new(10, 7, 8)
//!     .with_month_label("甲戌")?
//!     .with_day_label("己未")?;
//! let result = divine(&request)?;
//! assert_eq!(result.position, PalmPosition::KongWang);
//! # Ok::<(), DivinationError>(())
//! ```

pub mod divination;
pub mod error;

pub use divination::{Divination, DivinationRequest, divine, divine_at};
pub use error::DivinationError;

// Re-export the types callers need so they don't depend on the lower crates.
pub use liuren_base::{
    CalculationStep, Dominance, DominantLevel, EarthlyBranch, ElementAttribute, FiveElement,
    HeavenlyStem, Interaction, LabelSource, LiurenError, MetaphysicalAnalysis, PalmPosition,
    ReplayFrame, Sexagenary, Stage, interaction, shichen_from_hour,
};
pub use liuren_calendar::{
    CalendarError, GregorianApproximation, GregorianDateTime, LunarCalendar, LunarDate,
};
