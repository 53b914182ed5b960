//! Learning sprint planner.
//!
//! Turns a topic and a duration in days into a phased, day-by-day plan.
//! Days are split across four weighted phases (discover, practice, build,
//! polish) by largest-remainder apportionment; each day gets a cyclical
//! energy level and activities drawn from the phase's template pools.
//!
//! Zero I/O and fully deterministic: identical inputs produce identical plans.

pub mod activities;
pub mod apportion;
pub mod constants;
pub mod energy;
pub mod phase;
pub mod plan;
pub mod render;
pub mod template;

pub use activities::build_daily_activities;
pub use apportion::{PhaseAllocation, distribute_phases, largest_remainder};
pub use constants::{JOURNAL_PROMPT, MAX_DAYS, MIN_DAYS, PLACEHOLDER_TOPIC, TOPIC_PLACEHOLDER};
pub use energy::{Cadence, ENERGY_SEQUENCE, EnergyLevel, energy_for_day};
pub use phase::{PHASES, ParsePhaseKeyError, PhaseDefinition, PhaseKey, catalog, phase};
pub use plan::{DayPlan, GeneratedPlan, PhaseSummary, clamp_days, export_json, generate_plan};
pub use render::{render_markdown, render_text};
pub use template::{format_with_topic, resolve_topic};
