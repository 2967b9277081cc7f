//! Error types for Six-Ren calculations.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Vocabulary a symbol lookup was performed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// The 12 earthly branches.
    Branch,
    /// The 10 heavenly stems.
    Stem,
    /// The 5 elements.
    Element,
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Branch => f.write_str("earthly branch"),
            Self::Stem => f.write_str("heavenly stem"),
            Self::Element => f.write_str("element"),
        }
    }
}

/// Errors from Six-Ren stepping and elemental analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LiurenError {
    /// A numeric input is outside its valid range.
    #[error("invalid input: {field} = {value}")]
    InvalidInput {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// A sexagenary label is not a valid stem+branch pair.
    #[error("malformed calendar label: {0:?}")]
    MalformedCalendarLabel(String),
    /// A label outside the fixed branch/stem/element vocabularies.
    #[error("unknown {kind}: {label:?}")]
    UnknownSymbol {
        /// Which vocabulary was searched.
        kind: SymbolKind,
        /// The rejected label.
        label: String,
    },
}

impl LiurenError {
    pub(crate) fn invalid(field: &'static str, value: impl Into<i64>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn unknown(kind: SymbolKind, label: &str) -> Self {
        Self::UnknownSymbol {
            kind,
            label: label.to_owned(),
        }
    }
}
