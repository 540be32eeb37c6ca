//! Scenario model for the RBE sandbox
//!
//! This crate maps four 0-100 policy dials to single-year outcome metrics and
//! a yearly trajectory. Everything here is a pure function of its inputs:
//! - `evaluate` - single-year outcomes (inequality, work week, emissions, security)
//! - `project` - per-year drift of the base outcomes over a horizon
//! - `classify` - RBE-leaning vs profit-maximizing label
//! - `sweep` - step one dial from 0 to 100 with the others held fixed
//!
//! # Example
//!
//! ```
//! use rbe_core::{PolicyInputs, ScenarioReport, DEFAULT_HORIZON};
//!
//! let inputs = PolicyInputs::new(20, 80, 70, 80);
//! let report = ScenarioReport::build(inputs, DEFAULT_HORIZON);
//!
//! assert_eq!(report.projection.len(), 31);
//! assert!(report.classification.is_rbe_leaning());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod classify;
pub mod error;
pub mod evaluate;
pub mod presets;
pub mod projection;
pub mod report;
pub mod seed;
pub mod sweep;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use classify::classify;
pub use error::{DialError, PresetError, SweepError};
pub use evaluate::{clamp01, evaluate};
pub use model::{OutcomeMetrics, PolicyDial, PolicyInputs, ScenarioClass, YearlyProjection};
pub use presets::{PRESETS, Preset, find_preset};
pub use projection::{DEFAULT_HORIZON, project};
pub use report::ScenarioReport;
pub use seed::{seed_from_pairs, seed_inputs};
pub use sweep::{SweepPoint, sweep_dial};
