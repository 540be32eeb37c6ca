//! Tests for the scenario model
//!
//! Tests are organized by topic:
//! - `evaluate` - single-year formulas, ranges, and monotonicity
//! - `projection` - trajectory length, ordering, and drift
//! - `classification` - RBE-leaning vs profit-max labels, presets
//! - `seeding` - query parameter and numeric seeding
//! - `sweep` - dial sweeps

mod evaluate;
mod sweep;

use crate::model::PolicyInputs;

/// Tolerance for comparing hand-computed values against the model
const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{what}: expected {expected}, got {actual}"
    );
}

/// Every input on a grid with the given stride, corners included
fn input_grid(stride: usize) -> impl Iterator<Item = PolicyInputs> {
    let values: Vec<u8> = (0..=100u8).step_by(stride).collect();
    let mut grid = Vec::with_capacity(values.len().pow(4));
    for &p in &values {
        for &c in &values {
            for &a in &values {
                for &e in &values {
                    grid.push(PolicyInputs::new(p, c, a, e));
                }
            }
        }
    }
    grid.into_iter()
}
