//! Plan assembly: apportion the days, then walk each allocated phase in
//! catalog order, building one `DayPlan` per absolute day.

use serde::{Deserialize, Serialize};

use crate::activities::build_daily_activities;
use crate::apportion::{PhaseAllocation, distribute_phases};
use crate::constants::{MAX_DAYS, MIN_BAR_PERCENT, MIN_DAYS};
use crate::energy::{Cadence, EnergyLevel, energy_for_day};
use crate::phase::{PhaseDefinition, PhaseKey, cycle};
use crate::template::{format_with_topic, resolve_topic};

/// One allocated phase, with its inclusive span of absolute days.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseSummary {
    pub key: PhaseKey,
    pub label: String,
    pub start_day: u32,
    pub end_day: u32,
    pub summary: String,
    pub milestone: String,
    pub ratio: f64,
}

impl PhaseSummary {
    /// Number of days in the span.
    pub fn days(&self) -> u32 {
        self.end_day + 1 - self.start_day
    }

    /// Width of the phase's share bar: its actual share of the plan, rounded,
    /// never below [`MIN_BAR_PERCENT`].
    pub fn bar_width_percent(&self, total_days: u32) -> u32 {
        if total_days == 0 {
            return MIN_BAR_PERCENT;
        }
        let share = (f64::from(self.days()) / f64::from(total_days) * 100.0).round() as u32;
        share.max(MIN_BAR_PERCENT)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u32,
    pub phase_key: PhaseKey,
    pub phase_label: String,
    pub focus: String,
    pub energy: EnergyLevel,
    pub activities: Vec<String>,
    /// Present only on the last day of a phase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub topic: String,
    pub total_days: u32,
    pub phases: Vec<PhaseSummary>,
    pub cadence: Cadence,
    pub days: Vec<DayPlan>,
}

impl GeneratedPlan {
    pub fn phase(&self, key: PhaseKey) -> Option<&PhaseSummary> {
        self.phases.iter().find(|p| p.key == key)
    }

    /// Days belonging to `key`, in order.
    pub fn days_in(&self, key: PhaseKey) -> impl Iterator<Item = &DayPlan> {
        self.days.iter().filter(move |d| d.phase_key == key)
    }
}

/// Clamp a raw day count into `MIN_DAYS..=MAX_DAYS`.
pub fn clamp_days(requested: i64) -> u32 {
    requested.clamp(i64::from(MIN_DAYS), i64::from(MAX_DAYS)) as u32
}

/// Build the full plan for `topic` over `requested_days`.
///
/// Total over its input: a blank topic becomes the placeholder topic and the
/// day count is clamped. Identical inputs give identical plans.
pub fn generate_plan(topic: &str, requested_days: i64) -> GeneratedPlan {
    let topic = resolve_topic(topic);
    let total_days = clamp_days(requested_days);

    let spans: Vec<(PhaseAllocation, u32)> = distribute_phases(total_days)
        .into_iter()
        .scan(1, |cursor, alloc| {
            let start = *cursor;
            *cursor += alloc.days;
            Some((alloc, start))
        })
        .collect();

    let days: Vec<DayPlan> = spans
        .iter()
        .flat_map(|&(alloc, start)| {
            let definition = alloc.definition();
            let topic = topic.as_str();
            (0..alloc.days).map(move |i| build_day(definition, topic, start + i, i, alloc.days))
        })
        .collect();

    let phases = spans
        .iter()
        .map(|&(alloc, start)| summarize(alloc.definition(), &topic, start, alloc.days))
        .collect();

    let cadence = Cadence::tally(days.iter().map(|d| d.energy));

    GeneratedPlan {
        topic,
        total_days,
        phases,
        cadence,
        days,
    }
}

fn build_day(
    definition: &PhaseDefinition,
    topic: &str,
    day: u32,
    local_index: u32,
    phase_days: u32,
) -> DayPlan {
    let index = local_index as usize;
    let focus = cycle(definition.focus_templates, index)
        .map(|t| format_with_topic(t, topic))
        .unwrap_or_default();
    let milestone =
        (local_index + 1 == phase_days).then(|| format_with_topic(definition.milestone, topic));

    DayPlan {
        day,
        phase_key: definition.key,
        phase_label: definition.label().to_string(),
        focus,
        energy: energy_for_day(day),
        activities: build_daily_activities(definition, topic, index),
        milestone,
    }
}

fn summarize(definition: &PhaseDefinition, topic: &str, start: u32, days: u32) -> PhaseSummary {
    PhaseSummary {
        key: definition.key,
        label: definition.label().to_string(),
        start_day: start,
        end_day: start + days - 1,
        summary: format_with_topic(definition.summary, topic),
        milestone: format_with_topic(definition.milestone, topic),
        ratio: definition.ratio,
    }
}

/// Serialize a plan as pretty-printed camelCase JSON.
pub fn export_json(plan: &GeneratedPlan) -> serde_json::Result<String> {
    serde_json::to_string_pretty(plan)
}
