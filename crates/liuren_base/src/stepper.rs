//! Six-Ren stepping: three counted walks around the palm ring.
//!
//! Counting starts on 大安 (ring index 0). The month count is walked first,
//! the day count continues from where the month walk landed, and the hour
//! count (branch index + 1) continues from the day landing. Each walk counts
//! its starting position as step one, so a walk of `n` from `s` ends on
//! `(s + n - 1) mod 6`.

use serde::Serialize;

use crate::branch::EarthlyBranch;
use crate::error::LiurenError;
use crate::palm::{PalmPosition, RING_SIZE};

/// Largest lunar month number.
pub const MAX_LUNAR_MONTH: u32 = 12;
/// Largest lunar day number.
pub const MAX_LUNAR_DAY: u32 = 30;

/// Which count a stage walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    Month,
    Day,
    Hour,
}

impl Stage {
    /// Display title of the stage.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Month => "步驟一：月份定位",
            Self::Day => "步驟二：日期定位",
            Self::Hour => "步驟三：時辰定位",
        }
    }

    /// 0-based stage order.
    pub const fn order(self) -> u8 {
        self as u8
    }
}

/// One counted walk around the ring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationStep {
    pub stage: Stage,
    pub title: &'static str,
    /// Number of positions counted (>= 1).
    pub count: u32,
    /// Ring index the walk starts on.
    pub start_index: u8,
    /// Ring index the walk lands on.
    pub end_index: u8,
    /// Every ring index visited, in order; `path.len() == count`.
    pub path: Vec<u8>,
}

impl CalculationStep {
    /// Walk `count` positions starting at `start_index`.
    fn walk(stage: Stage, start_index: u8, count: u32) -> Self {
        let start = u32::from(start_index % RING_SIZE);
        let ring = u32::from(RING_SIZE);
        let path = (0..count).map(|i| ((start + i) % ring) as u8).collect();
        Self {
            stage,
            title: stage.title(),
            count,
            start_index: start as u8,
            end_index: ((start + count - 1) % ring) as u8,
            path,
        }
    }

    /// Position the walk starts on.
    pub const fn start_position(&self) -> PalmPosition {
        PalmPosition::from_ring_index(self.start_index)
    }

    /// Position the walk lands on.
    pub const fn end_position(&self) -> PalmPosition {
        PalmPosition::from_ring_index(self.end_index)
    }
}

/// Validate the lunar month/day counts shared by stepping and analysis.
pub(crate) fn check_counts(month: u32, day: u32) -> Result<(), LiurenError> {
    if !(1..=MAX_LUNAR_MONTH).contains(&month) {
        return Err(LiurenError::invalid("month", month));
    }
    if !(1..=MAX_LUNAR_DAY).contains(&day) {
        return Err(LiurenError::invalid("day", day));
    }
    Ok(())
}

/// Run the three stepping stages for a lunar month, lunar day and hour slot.
///
/// `hour_slot` is the earthly-branch index of the hour (0 = 子); the hour
/// stage counts `hour_slot + 1` positions. Inputs are validated before any
/// stage runs.
pub fn step(month: u32, day: u32, hour_slot: u8) -> Result<[CalculationStep; 3], LiurenError> {
    check_counts(month, day)?;
    let hour = EarthlyBranch::from_index(hour_slot)?;

    let month_step = CalculationStep::walk(Stage::Month, 0, month);
    let day_step = CalculationStep::walk(Stage::Day, month_step.end_index, day);
    let hour_step = CalculationStep::walk(
        Stage::Hour,
        day_step.end_index,
        u32::from(hour.index()) + 1,
    );
    Ok([month_step, day_step, hour_step])
}

/// Landing position of a completed stepping sequence.
pub const fn landing_position(steps: &[CalculationStep; 3]) -> PalmPosition {
    steps[2].end_position()
}

/// A single highlighted position while replaying the stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayFrame {
    pub stage: Stage,
    /// 0-based offset within the stage's path.
    pub offset: u32,
    pub ring_index: u8,
    pub position: PalmPosition,
}

/// Replay every visited position of the stages in counting order.
///
/// Pacing is up to the caller; frames are produced immediately.
pub fn replay(steps: &[CalculationStep]) -> impl Iterator<Item = ReplayFrame> + '_ {
    steps.iter().flat_map(|step| {
        step.path
            .iter()
            .enumerate()
            .map(move |(offset, &ring_index)| ReplayFrame {
                stage: step.stage,
                offset: offset as u32,
                ring_index,
                position: PalmPosition::from_ring_index(ring_index),
            })
    })
}
