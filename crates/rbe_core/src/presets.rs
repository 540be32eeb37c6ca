//! Named fixed scenarios offered next to the sliders

use serde::Serialize;

use crate::error::PresetError;
use crate::model::PolicyInputs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    /// Stable identifier used in URLs and on the command line
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub inputs: PolicyInputs,
}

pub const PRESETS: [Preset; 3] = [
    Preset {
        key: "late-capitalism",
        name: "Default late-capitalism",
        description: "High profit, low commons, weak eco limits.",
        inputs: PolicyInputs {
            profit_priority: 80,
            commons_level: 20,
            automation_level: 70,
            eco_constraint: 25,
        },
    },
    Preset {
        key: "fresco-rbe",
        name: "Fresco-leaning RBE",
        description: "High commons, strong eco limits, automation for liberation.",
        inputs: PolicyInputs {
            profit_priority: 20,
            commons_level: 80,
            automation_level: 70,
            eco_constraint: 80,
        },
    },
    Preset {
        key: "greenwashed",
        name: "Greenwashed status quo",
        description: "High profit, medium eco rhetoric, weak commons.",
        inputs: PolicyInputs {
            profit_priority: 75,
            commons_level: 35,
            automation_level: 60,
            eco_constraint: 55,
        },
    },
];

/// Look up a preset by key or display name, ignoring ASCII case.
pub fn find_preset(name: &str) -> Result<&'static Preset, PresetError> {
    let name = name.trim();
    PRESETS
        .iter()
        .find(|preset| {
            preset.key.eq_ignore_ascii_case(name) || preset.name.eq_ignore_ascii_case(name)
        })
        .ok_or_else(|| PresetError::UnknownPreset(name.to_string()))
}
