//! Single-year evaluation of a scenario
//!
//! Every metric is an affine or bilinear combination of the normalized dials,
//! clamped into its documented range. Raising profit priority pushes
//! inequality and emissions up and security down; commons ownership and
//! ecological limits push back.

use crate::model::{OutcomeMetrics, PolicyDial, PolicyInputs};

/// Clamp a value into [0, 1]
#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Dials normalized to [0, 1]
#[derive(Debug, Clone, Copy)]
pub(crate) struct DialFractions {
    pub p: f64,
    pub c: f64,
    pub a: f64,
    pub e: f64,
}

impl From<&PolicyInputs> for DialFractions {
    fn from(inputs: &PolicyInputs) -> Self {
        Self {
            p: inputs.fraction(PolicyDial::ProfitPriority),
            c: inputs.fraction(PolicyDial::CommonsLevel),
            a: inputs.fraction(PolicyDial::AutomationLevel),
            e: inputs.fraction(PolicyDial::EcoConstraint),
        }
    }
}

/// Evaluate the single-year outcomes of a scenario.
pub fn evaluate(inputs: &PolicyInputs) -> OutcomeMetrics {
    let DialFractions { p, c, a, e } = DialFractions::from(inputs);

    let inequality = clamp01(0.3 + 0.9 * p - 0.7 * c);

    // 40h baseline. Automation only shortens the week when commons share the gains.
    let automation_effect = -15.0 * a * (0.3 + 0.7 * c);
    let profit_penalty = 8.0 * p * (1.0 - c);
    let raw_hours = 40.0 + automation_effect + profit_penalty;
    let avg_work_hours = (clamp01(raw_hours / 60.0) * 40.0 + 10.0).round() as u32;

    let throughput = 0.5 + 0.4 * a + 0.3 * p;
    let emissions_index = clamp01(throughput * (1.0 - 0.8 * e));

    let security_index = clamp01(0.2 + 0.6 * c + 0.4 * e - 0.4 * inequality);

    OutcomeMetrics {
        inequality,
        avg_work_hours,
        emissions_index,
        security_index,
    }
}
