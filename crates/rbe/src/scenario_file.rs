//! YAML scenario files
//!
//! A scenario file names any subset of the four dials:
//!
//! ```yaml
//! name: Municipal broadband
//! commonsLevel: 65
//! ecoConstraint: 40
//! ```
//!
//! Missing dials keep whatever the caller started from; values are clamped
//! into range the same way URL parameters are.

use std::path::Path;

use color_eyre::eyre::{WrapErr, eyre};
use rbe_core::seed::seed_numeric;
use rbe_core::{PolicyDial, PolicyInputs};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_priority: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commons_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automation_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eco_constraint: Option<f64>,
}

impl ScenarioFile {
    /// Capture a full set of inputs
    pub fn from_inputs(name: Option<String>, inputs: PolicyInputs) -> Self {
        Self {
            name,
            profit_priority: Some(f64::from(inputs.profit_priority)),
            commons_level: Some(f64::from(inputs.commons_level)),
            automation_level: Some(f64::from(inputs.automation_level)),
            eco_constraint: Some(f64::from(inputs.eco_constraint)),
        }
    }

    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read scenario file {}", path.display()))?;
        Self::from_yaml(&content)
            .map_err(|e| eyre!("Failed to parse scenario file {}: {e}", path.display()))
    }

    pub fn save(&self, path: &Path) -> color_eyre::Result<()> {
        let yaml = self
            .to_yaml()
            .map_err(|e| eyre!("Failed to serialize scenario: {e}"))?;
        std::fs::write(path, yaml)
            .wrap_err_with(|| format!("Failed to write scenario file {}", path.display()))
    }

    /// Overlay the dials present in this file onto `prev`.
    pub fn apply(&self, prev: PolicyInputs) -> PolicyInputs {
        seed_numeric(
            prev,
            [
                (PolicyDial::ProfitPriority, self.profit_priority),
                (PolicyDial::CommonsLevel, self.commons_level),
                (PolicyDial::AutomationLevel, self.automation_level),
                (PolicyDial::EcoConstraint, self.eco_constraint),
            ],
        )
    }
}
