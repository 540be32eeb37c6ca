//! One-dimensional dial sweeps
//!
//! A sweep steps one dial evenly from 0 to 100 while the other three stay at
//! their base values, showing how sensitive each outcome is to that dial.
//!
//! ```
//! use rbe_core::{PolicyDial, PolicyInputs, sweep_dial};
//!
//! let points = sweep_dial(&PolicyInputs::default(), PolicyDial::CommonsLevel, 11).unwrap();
//! assert_eq!(points.first().unwrap().value, 0);
//! assert_eq!(points.last().unwrap().value, 100);
//! ```

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::error::SweepError;
use crate::evaluate::evaluate;
use crate::model::{DIAL_MAX, OutcomeMetrics, PolicyDial, PolicyInputs, ScenarioClass};

pub const MIN_SWEEP_STEPS: usize = 2;
pub const MAX_SWEEP_STEPS: usize = DIAL_MAX as usize + 1;

/// Outcomes at one dial setting of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub value: u8,
    pub outcomes: OutcomeMetrics,
    pub classification: ScenarioClass,
}

/// Dial values for `steps` evenly spaced points from 0 to 100, inclusive.
pub fn sweep_values(steps: usize) -> Result<Vec<u8>, SweepError> {
    if steps < MIN_SWEEP_STEPS {
        return Err(SweepError::TooFewSteps(steps));
    }
    if steps > MAX_SWEEP_STEPS {
        return Err(SweepError::TooManySteps(steps));
    }

    let span = f64::from(DIAL_MAX);
    let last = (steps - 1) as f64;
    Ok((0..steps)
        .map(|i| (i as f64 * span / last).round() as u8)
        .collect())
}

/// Sweep `dial` over `steps` points with the other dials held at `base`.
///
/// Points are returned in ascending dial order.
pub fn sweep_dial(
    base: &PolicyInputs,
    dial: PolicyDial,
    steps: usize,
) -> Result<Vec<SweepPoint>, SweepError> {
    let values = sweep_values(steps)?;
    let base = base.clamped();
    tracing::debug!(%dial, steps, "sweeping dial");

    let point = |value: u8| {
        let inputs = base.with(dial, value);
        let outcomes = evaluate(&inputs);
        SweepPoint {
            value,
            outcomes,
            classification: classify(&inputs, &outcomes),
        }
    };

    #[cfg(feature = "parallel")]
    let points = values.into_par_iter().map(point).collect();
    #[cfg(not(feature = "parallel"))]
    let points = values.into_iter().map(point).collect();

    Ok(points)
}
