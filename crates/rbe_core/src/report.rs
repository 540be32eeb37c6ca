use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::evaluate::evaluate;
use crate::model::{OutcomeMetrics, PolicyInputs, ScenarioClass, YearlyProjection};
use crate::projection::project;

/// Everything a presentation layer needs to render one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub inputs: PolicyInputs,
    pub outcomes: OutcomeMetrics,
    pub classification: ScenarioClass,
    pub projection: Vec<YearlyProjection>,
}

impl ScenarioReport {
    /// Evaluate, classify, and project `inputs` over `horizon` years.
    pub fn build(inputs: PolicyInputs, horizon: u32) -> Self {
        let inputs = inputs.clamped();
        let outcomes = evaluate(&inputs);
        Self {
            inputs,
            outcomes,
            classification: classify(&inputs, &outcomes),
            projection: project(&inputs, horizon),
        }
    }

    /// The last projected year
    pub fn final_year(&self) -> Option<&YearlyProjection> {
        self.projection.last()
    }
}
