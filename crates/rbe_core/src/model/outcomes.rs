//! Outcome types produced by the scenario model
//!
//! None of these are stored; they are recomputed from `PolicyInputs` on every
//! evaluation.

use serde::{Deserialize, Serialize};

/// Single-year outcomes of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeMetrics {
    /// Share of gains captured by owners, in [0, 1]
    pub inequality: f64,
    /// Average work week in hours, in [10, 50]
    pub avg_work_hours: u32,
    /// Emissions pressure, in [0, 1]
    pub emissions_index: f64,
    /// Material security of the population, in [0, 1]
    pub security_index: f64,
}

impl OutcomeMetrics {
    /// Work week mapped onto [0, 1] for bar displays (10h = 0, 50h = 1)
    pub fn work_week_fraction(&self) -> f64 {
        (f64::from(self.avg_work_hours) - 10.0) / 40.0
    }
}

/// One year of a scenario's trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjection {
    /// Years since the start of the projection
    pub year: u32,
    pub inequality: f64,
    pub emissions: f64,
    pub security: f64,
}

/// Caller-facing label for a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScenarioClass {
    /// Secure, equal, low-emission, and commons-heavy
    RbeLeaning,
    ProfitMaximizing,
}

impl ScenarioClass {
    pub fn is_rbe_leaning(self) -> bool {
        matches!(self, ScenarioClass::RbeLeaning)
    }

    /// Short badge label
    pub fn label(self) -> &'static str {
        match self {
            ScenarioClass::RbeLeaning => "RBE-leaning",
            ScenarioClass::ProfitMaximizing => "Profit-max",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            ScenarioClass::RbeLeaning => "Long game: Stability",
            ScenarioClass::ProfitMaximizing => "Long game: Familiar cliff",
        }
    }

    pub fn narrative(self) -> &'static str {
        match self {
            ScenarioClass::RbeLeaning => {
                "High commons and ecological constraints keep inequality and emissions from \
                 spiraling. Automation shows up as time freedom, not precarity."
            }
            ScenarioClass::ProfitMaximizing => {
                "Profit-heavy rules with weak commons gradually push inequality and emissions up. \
                 Even with automation, most stay locked in long work weeks."
            }
        }
    }
}
