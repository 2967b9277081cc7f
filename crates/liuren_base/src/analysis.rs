//! Five-element reading of a Six-Ren result.
//!
//! Three attributes are derived from the request: the environment from the
//! month branch, the day's main qi from the day stem, and the action from the
//! hour branch. The landing position selects which of the three dominates;
//! the other two are compared against the dominant element, and only
//! generating (生) or controlling (剋) relationships produce advice.
//!
//! Month branch and day stem come from the calendar's sexagenary labels.
//! When a label is missing the value is approximated from the lunar number
//! (month 1 → 寅, day 1 → 甲). An approximated month branch is not used in
//! the interaction advice.

use serde::Serialize;

use crate::branch::EarthlyBranch;
use crate::element::{ElementAttribute, Interaction, interaction};
use crate::error::LiurenError;
use crate::palm::PalmPosition;
use crate::sexagenary::Sexagenary;
use crate::stem::HeavenlyStem;
use crate::stepper::check_counts;

/// Advice used when no generating or controlling relationship is found.
pub const BALANCED_ADVICE: &str = "五行平穩，順其自然。";

const AVOID_MONTH_NOTE: &str = " + 月份避忌";

/// Calendar tier whose element leads the reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DominantLevel {
    #[serde(rename = "月份")]
    Month,
    #[serde(rename = "日干")]
    Day,
    #[serde(rename = "時辰")]
    Hour,
}

impl DominantLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Month => "月份",
            Self::Day => "日干",
            Self::Hour => "時辰",
        }
    }

    /// Name of the attribute this level contributes to the advice lines.
    pub const fn aspect(self) -> &'static str {
        match self {
            Self::Month => "環境",
            Self::Day => "主氣",
            Self::Hour => "行動",
        }
    }
}

/// Dominant level plus the 赤口 avoid-month annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dominance {
    pub level: DominantLevel,
    pub avoid_month: bool,
}

impl Dominance {
    /// Select the dominant level for a landing position.
    ///
    /// 速喜 → hour; 大安, 小吉 → day; 留連, 空亡 → month; 赤口 → hour with
    /// the month to be avoided.
    pub const fn for_position(position: PalmPosition) -> Self {
        let (level, avoid_month) = match position {
            PalmPosition::SuXi => (DominantLevel::Hour, false),
            PalmPosition::DaAn | PalmPosition::XiaoJi => (DominantLevel::Day, false),
            PalmPosition::LiuLian | PalmPosition::KongWang => (DominantLevel::Month, false),
            PalmPosition::ChiKou => (DominantLevel::Hour, true),
        };
        Self { level, avoid_month }
    }

    /// Level label with annotation, e.g. `時辰 + 月份避忌`.
    pub fn label(self) -> String {
        if self.avoid_month {
            format!("{}{AVOID_MONTH_NOTE}", self.level.label())
        } else {
            self.level.label().to_owned()
        }
    }
}

/// Where a month branch or day stem came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LabelSource {
    /// Taken from a calendar sexagenary label.
    Calendar,
    /// Estimated from the lunar month or day number.
    Approximated,
}

/// Month branch estimated from the lunar month number (month 1 → 寅).
pub const fn approximate_month_branch(month: u32) -> EarthlyBranch {
    EarthlyBranch::wrapping(month + 1)
}

/// Day stem estimated from the lunar day number (day 1 → 甲).
pub const fn approximate_day_stem(day: u32) -> HeavenlyStem {
    HeavenlyStem::wrapping(day + 9)
}

/// Complete five-element reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaphysicalAnalysis {
    pub month_branch: EarthlyBranch,
    pub day_stem: HeavenlyStem,
    pub hour_branch: EarthlyBranch,
    pub month_source: LabelSource,
    pub day_source: LabelSource,
    /// Attribute of the month branch.
    pub environment: ElementAttribute,
    /// Attribute of the day stem.
    pub day: ElementAttribute,
    /// Attribute of the hour branch.
    pub action: ElementAttribute,
    pub dominance: Dominance,
    /// Annotated dominant level label.
    pub dominant_level: String,
    pub leading_direction: &'static str,
    pub leading_color: &'static str,
    /// Generating/controlling advice, or [`BALANCED_ADVICE`].
    pub supplementary_advice: String,
    pub suggestion: String,
}

impl MetaphysicalAnalysis {
    /// Attribute selected by the dominant level.
    pub const fn dominant_attribute(&self) -> ElementAttribute {
        match self.dominance.level {
            DominantLevel::Month => self.environment,
            DominantLevel::Day => self.day,
            DominantLevel::Hour => self.action,
        }
    }
}

/// Derive the five-element reading for a divination.
///
/// `month_label` and `day_label` are the calendar's sexagenary labels for the
/// lunar month and day; either may be absent, in which case it is
/// approximated from `month` / `day`.
pub fn analyze(
    month: u32,
    day: u32,
    hour_slot: u8,
    position: PalmPosition,
    month_label: Option<Sexagenary>,
    day_label: Option<Sexagenary>,
) -> Result<MetaphysicalAnalysis, LiurenError> {
    check_counts(month, day)?;
    let hour_branch = EarthlyBranch::from_index(hour_slot)?;

    let (month_branch, month_source) = match month_label {
        Some(label) => (label.branch, LabelSource::Calendar),
        None => (approximate_month_branch(month), LabelSource::Approximated),
    };
    let (day_stem, day_source) = match day_label {
        Some(label) => (label.stem, LabelSource::Calendar),
        None => (approximate_day_stem(day), LabelSource::Approximated),
    };

    let environment = month_branch.element().attribute();
    let day_attr = day_stem.element().attribute();
    let action = hour_branch.element().attribute();

    let dominance = Dominance::for_position(position);
    let dominant = match dominance.level {
        DominantLevel::Month => environment,
        DominantLevel::Day => day_attr,
        DominantLevel::Hour => action,
    };

    let levels = [
        (DominantLevel::Month, environment),
        (DominantLevel::Day, day_attr),
        (DominantLevel::Hour, action),
    ];
    let advice: Vec<String> = levels
        .iter()
        .filter(|(level, _)| *level != dominance.level)
        .filter(|(level, _)| {
            !(*level == DominantLevel::Month && month_source == LabelSource::Approximated)
        })
        .filter_map(|(level, attr)| advice_line(*level, attr, &dominant))
        .collect();
    let supplementary_advice = if advice.is_empty() {
        BALANCED_ADVICE.to_owned()
    } else {
        advice.join(" ")
    };

    let dominant_level = dominance.label();
    let suggestion = format!(
        "{} 今日關鍵主導在於{dominant_level}，宜往{}，可用{}。",
        position.tip(),
        dominant.direction,
        dominant.color,
    );

    Ok(MetaphysicalAnalysis {
        month_branch,
        day_stem,
        hour_branch,
        month_source,
        day_source,
        environment,
        day: day_attr,
        action,
        dominance,
        dominant_level,
        leading_direction: dominant.direction,
        leading_color: dominant.color,
        supplementary_advice,
        suggestion,
    })
}

fn advice_line(
    level: DominantLevel,
    attr: &ElementAttribute,
    dominant: &ElementAttribute,
) -> Option<String> {
    match interaction(attr.element, dominant.element) {
        Interaction::Generates => Some(format!(
            "「{}」助勢，{}之氣相生，宜把握。",
            level.aspect(),
            attr.direction
        )),
        Interaction::Controls => Some(format!(
            "「{}」受阻，{}之氣相剋，宜避。",
            level.aspect(),
            attr.direction
        )),
        Interaction::Same | Interaction::DrainedBy | Interaction::Weakens => None,
    }
}
