//! Yearly trajectory of a scenario
//!
//! The base-year outcomes drift linearly in normalized time `t / horizon`.
//! The drift rates depend only on the dials, so a projection is fully
//! determined by its inputs and horizon.

use crate::evaluate::{DialFractions, clamp01, evaluate};
use crate::model::{PolicyInputs, YearlyProjection};

/// Horizon, in years, used by the sandbox's trajectory chart
pub const DEFAULT_HORIZON: u32 = 30;

/// Project a scenario over `horizon` years.
///
/// Returns `horizon + 1` records for years `0..=horizon`. Year 0 carries the
/// base outcomes of [`evaluate`]. A zero horizon yields that single record.
pub fn project(inputs: &PolicyInputs, horizon: u32) -> Vec<YearlyProjection> {
    let base = evaluate(inputs);
    let DialFractions { p, c, e, .. } = DialFractions::from(inputs);

    let inequality_rate = 0.4 * p * (1.0 - c) - 0.25 * c;
    let emissions_rate = 0.6 * (p + 0.3) * (1.0 - e) - 0.5 * e;
    let security_rate = 0.5 * c + 0.5 * e - 0.5 * p * (1.0 - c);

    (0..=horizon)
        .map(|year| {
            let t_norm = if horizon == 0 {
                0.0
            } else {
                f64::from(year) / f64::from(horizon)
            };

            YearlyProjection {
                year,
                inequality: clamp01(base.inequality + inequality_rate * t_norm),
                emissions: clamp01(base.emissions_index + emissions_rate * (t_norm * 0.8)),
                security: clamp01(base.security_index + security_rate * t_norm),
            }
        })
        .collect()
}
