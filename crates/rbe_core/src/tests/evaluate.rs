//! Tests for single-year evaluation
//!
//! These tests verify:
//! - Hand-computed outcomes for known scenarios
//! - Every outcome stays in its documented range
//! - Profit priority and commons ownership move inequality and security the right way
//! - Evaluation is a pure function

use super::{assert_close, input_grid};
use crate::evaluate::{clamp01, evaluate};
use crate::model::PolicyInputs;

#[test]
fn test_clamp01() {
    assert_eq!(clamp01(-0.2), 0.0);
    assert_eq!(clamp01(0.35), 0.35);
    assert_eq!(clamp01(1.7), 1.0);
}

/// The sandbox's starting sliders, worked by hand
#[test]
fn test_default_scenario_outcomes() {
    let outcomes = evaluate(&PolicyInputs::new(70, 20, 60, 25));

    // 0.3 + 0.63 - 0.14
    assert_close(outcomes.inequality, 0.79, "inequality");
    // raw hours = 40 - 3.96 + 4.48 = 40.52 -> 40.52 / 60 * 40 + 10 = 37.01
    assert_eq!(outcomes.avg_work_hours, 37);
    // throughput 0.95 * (1 - 0.2)
    assert_close(outcomes.emissions_index, 0.76, "emissions");
    // 0.2 + 0.12 + 0.1 - 0.316
    assert_close(outcomes.security_index, 0.104, "security");

    assert_eq!(evaluate(&PolicyInputs::default()), outcomes);
}

#[test]
fn test_all_dials_at_zero() {
    let outcomes = evaluate(&PolicyInputs::new(0, 0, 0, 0));

    assert_close(outcomes.inequality, 0.3, "inequality");
    // 40 / 60 * 40 + 10 = 36.67
    assert_eq!(outcomes.avg_work_hours, 37);
    assert_close(outcomes.emissions_index, 0.5, "emissions");
    assert_close(outcomes.security_index, 0.08, "security");
}

#[test]
fn test_all_dials_at_max() {
    let outcomes = evaluate(&PolicyInputs::new(100, 100, 100, 100));

    assert_close(outcomes.inequality, 0.5, "inequality");
    // 25 / 60 * 40 + 10 = 26.67
    assert_eq!(outcomes.avg_work_hours, 27);
    assert_close(outcomes.emissions_index, 0.24, "emissions");
    assert_close(outcomes.security_index, 1.0, "security");
}

/// Automation only shortens the week when the gains are shared
#[test]
fn test_automation_with_commons_shortens_work_week() {
    let private = evaluate(&PolicyInputs::new(50, 0, 100, 50));
    let shared = evaluate(&PolicyInputs::new(50, 100, 100, 50));
    let none = evaluate(&PolicyInputs::new(50, 100, 0, 50));

    assert!(shared.avg_work_hours < private.avg_work_hours);
    assert!(shared.avg_work_hours < none.avg_work_hours);
}

#[test]
fn test_outcomes_in_range_everywhere() {
    for inputs in input_grid(5) {
        let outcomes = evaluate(&inputs);
        assert!((0.0..=1.0).contains(&outcomes.inequality), "{inputs:?}");
        assert!((0.0..=1.0).contains(&outcomes.emissions_index), "{inputs:?}");
        assert!((0.0..=1.0).contains(&outcomes.security_index), "{inputs:?}");
        assert!((10..=50).contains(&outcomes.avg_work_hours), "{inputs:?}");
    }
}

#[test]
fn test_profit_priority_monotonicity() {
    for base in input_grid(10).filter(|inputs| inputs.profit_priority == 0) {
        let mut prev = evaluate(&base);
        for p in 1..=100u8 {
            let inputs = PolicyInputs { profit_priority: p, ..base };
            let next = evaluate(&inputs);
            assert!(
                next.inequality >= prev.inequality,
                "inequality fell at {inputs:?}"
            );
            assert!(
                next.security_index <= prev.security_index,
                "security rose at {inputs:?}"
            );
            prev = next;
        }
    }
}

#[test]
fn test_commons_level_monotonicity() {
    for base in input_grid(10).filter(|inputs| inputs.commons_level == 0) {
        let mut prev = evaluate(&base);
        for c in 1..=100u8 {
            let inputs = PolicyInputs { commons_level: c, ..base };
            let next = evaluate(&inputs);
            assert!(
                next.inequality <= prev.inequality,
                "inequality rose at {inputs:?}"
            );
            prev = next;
        }
    }
}

#[test]
fn test_evaluate_is_idempotent() {
    for inputs in input_grid(25) {
        assert_eq!(evaluate(&inputs), evaluate(&inputs));
    }
}
