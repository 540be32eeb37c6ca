use crate::model::{OutcomeMetrics, PolicyInputs, ScenarioClass};

const MIN_SECURITY: f64 = 0.6;
const MAX_INEQUALITY: f64 = 0.4;
const MAX_EMISSIONS: f64 = 0.5;
const MIN_COMMONS: u8 = 50;

/// Label a scenario from its evaluated outcomes and its commons dial.
///
/// All four bounds are strict.
pub fn classify(inputs: &PolicyInputs, outcomes: &OutcomeMetrics) -> ScenarioClass {
    if outcomes.security_index > MIN_SECURITY
        && outcomes.inequality < MAX_INEQUALITY
        && outcomes.emissions_index < MAX_EMISSIONS
        && inputs.commons_level > MIN_COMMONS
    {
        ScenarioClass::RbeLeaning
    } else {
        ScenarioClass::ProfitMaximizing
    }
}
