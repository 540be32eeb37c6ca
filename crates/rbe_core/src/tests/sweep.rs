//! Tests for dial sweeps

use crate::error::SweepError;
use crate::evaluate::evaluate;
use crate::model::{PolicyDial, PolicyInputs, ScenarioClass};
use crate::sweep::{sweep_dial, sweep_values};

#[test]
fn test_sweep_values_are_even_and_inclusive() {
    assert_eq!(sweep_values(2).unwrap(), vec![0, 100]);
    assert_eq!(sweep_values(5).unwrap(), vec![0, 25, 50, 75, 100]);
    assert_eq!(
        sweep_values(11).unwrap(),
        vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]
    );

    let all = sweep_values(101).unwrap();
    assert_eq!(all.len(), 101);
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_sweep_step_bounds() {
    assert_eq!(sweep_values(0), Err(SweepError::TooFewSteps(0)));
    assert_eq!(sweep_values(1), Err(SweepError::TooFewSteps(1)));
    assert_eq!(sweep_values(102), Err(SweepError::TooManySteps(102)));
}

#[test]
fn test_sweep_holds_other_dials() {
    let base = PolicyInputs::default();
    let points = sweep_dial(&base, PolicyDial::AutomationLevel, 6).unwrap();

    assert_eq!(points.len(), 6);
    for point in &points {
        let inputs = base.with(PolicyDial::AutomationLevel, point.value);
        assert_eq!(point.outcomes, evaluate(&inputs));
    }
}

#[test]
fn test_commons_sweep_lowers_inequality() {
    let points = sweep_dial(&PolicyInputs::default(), PolicyDial::CommonsLevel, 21).unwrap();

    assert!(
        points
            .windows(2)
            .all(|w| w[1].outcomes.inequality <= w[0].outcomes.inequality)
    );
}

/// Starting from the RBE preset, enough profit priority flips the label
#[test]
fn test_profit_sweep_crosses_classification() {
    let base = PolicyInputs::new(20, 80, 70, 80);
    let points = sweep_dial(&base, PolicyDial::ProfitPriority, 11).unwrap();

    assert_eq!(points[0].classification, ScenarioClass::RbeLeaning);
    assert_eq!(
        points.last().unwrap().classification,
        ScenarioClass::ProfitMaximizing
    );
}
