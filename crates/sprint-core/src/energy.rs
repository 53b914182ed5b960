use std::fmt;

use serde::{Deserialize, Serialize};

/// Suggested intensity for a day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyLevel {
    Deep,
    Medium,
    Light,
}

/// The repeating cadence, indexed by `(day - 1) mod 4`.
pub const ENERGY_SEQUENCE: [EnergyLevel; 4] = [
    EnergyLevel::Deep,
    EnergyLevel::Medium,
    EnergyLevel::Medium,
    EnergyLevel::Light,
];

impl EnergyLevel {
    /// Display order for tallies.
    pub const ALL: [EnergyLevel; 3] = [EnergyLevel::Deep, EnergyLevel::Medium, EnergyLevel::Light];

    pub fn as_str(self) -> &'static str {
        match self {
            EnergyLevel::Deep => "Deep",
            EnergyLevel::Medium => "Medium",
            EnergyLevel::Light => "Light",
        }
    }

    /// How to spend a day at this level.
    pub fn hint(self) -> &'static str {
        match self {
            EnergyLevel::Deep => "Plan longer, uninterrupted sessions to push breakthroughs.",
            EnergyLevel::Medium => "Keep momentum with solid practice blocks and small challenges.",
            EnergyLevel::Light => "Use lighter days for reflection, review, and recovery.",
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Energy label for an absolute, 1-indexed day number. Independent of phase.
/// Day 0 is read as day 1.
pub fn energy_for_day(day: u32) -> EnergyLevel {
    let offset = day.saturating_sub(1) as usize;
    ENERGY_SEQUENCE[offset % ENERGY_SEQUENCE.len()]
}

/// Occurrence count of each energy level across a plan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cadence {
    #[serde(rename = "Deep")]
    pub deep: u32,
    #[serde(rename = "Medium")]
    pub medium: u32,
    #[serde(rename = "Light")]
    pub light: u32,
}

impl Cadence {
    pub fn tally(levels: impl IntoIterator<Item = EnergyLevel>) -> Self {
        levels.into_iter().fold(Self::default(), Self::with)
    }

    /// Copy of `self` with one more `level`.
    pub fn with(self, level: EnergyLevel) -> Self {
        match level {
            EnergyLevel::Deep => Self { deep: self.deep + 1, ..self },
            EnergyLevel::Medium => Self { medium: self.medium + 1, ..self },
            EnergyLevel::Light => Self { light: self.light + 1, ..self },
        }
    }

    pub fn count(&self, level: EnergyLevel) -> u32 {
        match level {
            EnergyLevel::Deep => self.deep,
            EnergyLevel::Medium => self.medium,
            EnergyLevel::Light => self.light,
        }
    }

    pub fn total(&self) -> u32 {
        self.deep + self.medium + self.light
    }
}
