//! Policy dials that drive the scenario model
//!
//! Each dial is an integer in [`DIAL_MIN`, `DIAL_MAX`]. Values coming from
//! outside (sliders, URL parameters, request bodies, files) are clamped into
//! that range before they reach the model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DialError;

pub const DIAL_MIN: u8 = 0;
pub const DIAL_MAX: u8 = 100;

/// The four policy dials of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyInputs {
    /// How much the system optimizes for owner returns
    pub profit_priority: u8,
    /// How much infrastructure and AI is publicly owned
    pub commons_level: u8,
    /// How far automation is pushed into production
    pub automation_level: u8,
    /// How strictly planetary boundaries are enforced
    pub eco_constraint: u8,
}

impl Default for PolicyInputs {
    /// The sandbox's starting slider positions.
    fn default() -> Self {
        Self {
            profit_priority: 70,
            commons_level: 20,
            automation_level: 60,
            eco_constraint: 25,
        }
    }
}

impl PolicyInputs {
    /// Build inputs from raw dial values, clamping each into range.
    #[must_use]
    pub fn new(
        profit_priority: u8,
        commons_level: u8,
        automation_level: u8,
        eco_constraint: u8,
    ) -> Self {
        Self {
            profit_priority,
            commons_level,
            automation_level,
            eco_constraint,
        }
        .clamped()
    }

    /// Copy of these inputs with every dial clamped into range
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            profit_priority: self.profit_priority.min(DIAL_MAX),
            commons_level: self.commons_level.min(DIAL_MAX),
            automation_level: self.automation_level.min(DIAL_MAX),
            eco_constraint: self.eco_constraint.min(DIAL_MAX),
        }
    }

    pub fn get(&self, dial: PolicyDial) -> u8 {
        match dial {
            PolicyDial::ProfitPriority => self.profit_priority,
            PolicyDial::CommonsLevel => self.commons_level,
            PolicyDial::AutomationLevel => self.automation_level,
            PolicyDial::EcoConstraint => self.eco_constraint,
        }
    }

    /// Set one dial, clamping the value into range.
    pub fn set(&mut self, dial: PolicyDial, value: u8) {
        let value = value.min(DIAL_MAX);
        match dial {
            PolicyDial::ProfitPriority => self.profit_priority = value,
            PolicyDial::CommonsLevel => self.commons_level = value,
            PolicyDial::AutomationLevel => self.automation_level = value,
            PolicyDial::EcoConstraint => self.eco_constraint = value,
        }
    }

    #[must_use]
    pub fn with(mut self, dial: PolicyDial, value: u8) -> Self {
        self.set(dial, value);
        self
    }

    /// Dial value normalized to [0, 1]
    pub fn fraction(&self, dial: PolicyDial) -> f64 {
        f64::from(self.get(dial).min(DIAL_MAX)) / f64::from(DIAL_MAX)
    }
}

/// Names one of the four policy dials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PolicyDial {
    ProfitPriority,
    CommonsLevel,
    AutomationLevel,
    EcoConstraint,
}

impl PolicyDial {
    pub const ALL: [PolicyDial; 4] = [
        PolicyDial::ProfitPriority,
        PolicyDial::CommonsLevel,
        PolicyDial::AutomationLevel,
        PolicyDial::EcoConstraint,
    ];

    /// Field name used in query strings, JSON and YAML
    pub fn key(self) -> &'static str {
        match self {
            PolicyDial::ProfitPriority => "profitPriority",
            PolicyDial::CommonsLevel => "commonsLevel",
            PolicyDial::AutomationLevel => "automationLevel",
            PolicyDial::EcoConstraint => "ecoConstraint",
        }
    }

    /// Kebab-case alias, as used for command-line flags
    pub fn flag(self) -> &'static str {
        match self {
            PolicyDial::ProfitPriority => "profit-priority",
            PolicyDial::CommonsLevel => "commons-level",
            PolicyDial::AutomationLevel => "automation-level",
            PolicyDial::EcoConstraint => "eco-constraint",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PolicyDial::ProfitPriority => "Profit priority",
            PolicyDial::CommonsLevel => "Commons ownership",
            PolicyDial::AutomationLevel => "Automation level",
            PolicyDial::EcoConstraint => "Ecological limits",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PolicyDial::ProfitPriority => "How much does the system optimize for owner returns?",
            PolicyDial::CommonsLevel => "How much infrastructure & AI is publicly owned?",
            PolicyDial::AutomationLevel => "How far is AI pushed into production?",
            PolicyDial::EcoConstraint => "How strictly are planetary boundaries enforced?",
        }
    }
}

impl fmt::Display for PolicyDial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PolicyDial {
    type Err = DialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PolicyDial::ALL
            .into_iter()
            .find(|dial| dial.key().eq_ignore_ascii_case(s) || dial.flag().eq_ignore_ascii_case(s))
            .ok_or_else(|| DialError::UnknownDial(s.to_string()))
    }
}
