//! Unified error for the divination pipeline.

use liuren_base::LiurenError;
use liuren_calendar::CalendarError;
use thiserror::Error;

/// Any failure of a divination request. No partial results are returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DivinationError {
    /// Invalid counts, labels or symbols.
    #[error(transparent)]
    Liuren(#[from] LiurenError),
    /// Invalid Gregorian input or a failed lunar conversion.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
