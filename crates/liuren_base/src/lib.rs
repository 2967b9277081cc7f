//! Small Six-Ren (小六壬) calculation core.
//!
//! This crate provides:
//! - Earthly branch, heavenly stem and sexagenary symbol tables
//! - The hour-to-branch time-slot mapping
//! - Five-element attributes and generation/control interactions
//! - Three-stage stepping around the six-position palm ring
//! - The five-element reading of a landing position
//!
//! Everything here is a pure function over constant tables.

pub mod analysis;
pub mod branch;
pub mod element;
pub mod error;
pub mod palm;
pub mod sexagenary;
pub mod stem;
pub mod stepper;

pub use analysis::{
    BALANCED_ADVICE, Dominance, DominantLevel, LabelSource, MetaphysicalAnalysis, analyze,
    approximate_day_stem, approximate_month_branch,
};
pub use branch::{
    ALL_BRANCHES, EarthlyBranch, branch_element, hour_to_branch_index, shichen_from_hour,
};
pub use element::{ALL_ELEMENTS, ElementAttribute, FiveElement, Interaction, interaction};
pub use error::{LiurenError, SymbolKind};
pub use palm::{ALL_POSITIONS, PalmPosition, RING_SIZE};
pub use sexagenary::Sexagenary;
pub use stem::{ALL_STEMS, HeavenlyStem, stem_element};
pub use stepper::{
    CalculationStep, MAX_LUNAR_DAY, MAX_LUNAR_MONTH, ReplayFrame, Stage, landing_position,
    replay, step,
};
