use std::fmt;

/// Errors naming a policy dial
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialError {
    UnknownDial(String),
}

impl fmt::Display for DialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialError::UnknownDial(name) => write!(
                f,
                "unknown dial {name:?} (expected profitPriority, commonsLevel, automationLevel or ecoConstraint)"
            ),
        }
    }
}

impl std::error::Error for DialError {}

/// Errors related to preset lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    UnknownPreset(String),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::UnknownPreset(name) => write!(f, "preset {name:?} not found"),
        }
    }
}

impl std::error::Error for PresetError {}

/// Errors related to dial sweeps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepError {
    /// A sweep needs at least both endpoints
    TooFewSteps(usize),
    /// More steps than there are distinct dial values
    TooManySteps(usize),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::TooFewSteps(steps) => {
                write!(f, "sweep needs at least 2 steps, got {steps}")
            }
            SweepError::TooManySteps(steps) => {
                write!(f, "sweep supports at most 101 steps, got {steps}")
            }
        }
    }
}

impl std::error::Error for SweepError {}
