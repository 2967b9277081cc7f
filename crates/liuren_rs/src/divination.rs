//! End-to-end divination: validate, step, analyze.

use liuren_base::{
    CalculationStep, MetaphysicalAnalysis, PalmPosition, ReplayFrame, Sexagenary, analyze,
    landing_position, replay, shichen_from_hour, step,
};
use liuren_calendar::{GregorianDateTime, LunarCalendar, LunarDate};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::DivinationError;

/// Lunar inputs of one divination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivinationRequest {
    /// Lunar month (1–12).
    pub month: u32,
    /// Lunar day (1–30).
    pub day: u32,
    /// Earthly-branch index of the hour (0 = 子).
    pub hour_slot: u8,
    pub month_label: Option<Sexagenary>,
    pub day_label: Option<Sexagenary>,
}

impl DivinationRequest {
    /// Request without calendar labels; month branch and day stem will be
    /// approximated.
    pub fn new(month: u32, day: u32, hour_slot: u8) -> Self {
        Self {
            month,
            day,
            hour_slot,
            month_label: None,
            day_label: None,
        }
    }

    /// Request from a clock hour (0–23).
    pub fn from_hour(month: u32, day: u32, hour: u32) -> Result<Self, DivinationError> {
        let slot = shichen_from_hour(hour)?;
        Ok(Self::new(month, day, slot.index()))
    }

    /// Request from a collaborator's lunar date and the clock hour.
    pub fn from_lunar(lunar: &LunarDate, hour: u32) -> Result<Self, DivinationError> {
        lunar.validate()?;
        let mut request = Self::from_hour(lunar.month, lunar.day, hour)?;
        request.month_label = lunar.month_sexagenary()?;
        request.day_label = lunar.day_sexagenary()?;
        Ok(request)
    }

    /// Attach the month's sexagenary label, e.g. `乙亥`.
    pub fn with_month_label(mut self, label: &str) -> Result<Self, DivinationError> {
        self.month_label = Some(Sexagenary::parse(label)?);
        Ok(self)
    }

    /// Attach the day's sexagenary label, e.g. `甲子`.
    pub fn with_day_label(mut self, label: &str) -> Result<Self, DivinationError> {
        self.day_label = Some(Sexagenary::parse(label)?);
        Ok(self)
    }
}

/// Complete result of one divination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Divination {
    pub request: DivinationRequest,
    /// Collaborator output, when the request came from a Gregorian date.
    pub lunar: Option<LunarDate>,
    pub steps: [CalculationStep; 3],
    pub position: PalmPosition,
    pub analysis: MetaphysicalAnalysis,
}

impl Divination {
    /// Every visited position, stage by stage, for paced display.
    pub fn replay(&self) -> impl Iterator<Item = ReplayFrame> + '_ {
        replay(&self.steps).inspect(|f| {
            trace!(stage = ?f.stage, offset = f.offset, position = f.position.name(), "frame");
        })
    }
}

/// Run a divination from lunar inputs.
pub fn divine(request: &DivinationRequest) -> Result<Divination, DivinationError> {
    let steps = step(request.month, request.day, request.hour_slot)?;
    for s in &steps {
        debug!(
            stage = ?s.stage,
            count = s.count,
            start = s.start_position().name(),
            end = s.end_position().name(),
            "stage walked"
        );
    }
    let position = landing_position(&steps);
    let analysis = analyze(
        request.month,
        request.day,
        request.hour_slot,
        position,
        request.month_label,
        request.day_label,
    )?;
    debug!(
        position = position.name(),
        dominant = %analysis.dominant_level,
        month_source = ?analysis.month_source,
        day_source = ?analysis.day_source,
        "divination complete"
    );
    Ok(Divination {
        request: *request,
        lunar: None,
        steps,
        position,
        analysis,
    })
}

/// Run a divination for a Gregorian date-time using a lunar collaborator.
pub fn divine_at<C: LunarCalendar>(
    calendar: &C,
    datetime: &GregorianDateTime,
) -> Result<Divination, DivinationError> {
    let lunar = calendar.lunar_date(datetime)?;
    debug!(
        %datetime,
        lunar_month = lunar.month,
        lunar_day = lunar.day,
        month_label = ?lunar.month_label,
        day_label = ?lunar.day_label,
        "lunar date resolved"
    );
    let request = DivinationRequest::from_lunar(&lunar, datetime.hour)?;
    let mut divination = divine(&request)?;
    divination.lunar = Some(lunar);
    Ok(divination)
}
