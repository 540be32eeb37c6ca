mod inputs;
mod outcomes;

pub use inputs::{DIAL_MAX, DIAL_MIN, PolicyDial, PolicyInputs};
pub use outcomes::{OutcomeMetrics, ScenarioClass, YearlyProjection};
