//! Seeding policy inputs from loosely typed sources
//!
//! URL query strings, request bodies, and scenario files may carry any subset
//! of the four dials. A value that is a finite number is clamped into range and
//! rounded to the nearest integer; anything else keeps the prior value.

use std::collections::HashMap;

use crate::model::{DIAL_MAX, DIAL_MIN, PolicyDial, PolicyInputs};

/// Clamp a numeric dial value into range, or `None` when it is not finite.
pub fn dial_value(raw: f64) -> Option<u8> {
    if !raw.is_finite() {
        return None;
    }
    Some(raw.clamp(f64::from(DIAL_MIN), f64::from(DIAL_MAX)).round() as u8)
}

/// Parse a textual dial value. Empty and non-numeric text yields `None`.
pub fn parse_dial_value(raw: &str) -> Option<u8> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().and_then(dial_value)
}

/// Seed each dial from `lookup`, falling back to `prev` per field.
pub fn seed_inputs<F, S>(prev: PolicyInputs, mut lookup: F) -> PolicyInputs
where
    F: FnMut(&str) -> Option<S>,
    S: AsRef<str>,
{
    PolicyDial::ALL.into_iter().fold(prev, |inputs, dial| {
        match lookup(dial.key()).and_then(|raw| parse_dial_value(raw.as_ref())) {
            Some(value) => inputs.with(dial, value),
            None => inputs,
        }
    })
}

/// Seed from already-decoded key/value pairs such as a parsed query string.
pub fn seed_from_pairs(prev: PolicyInputs, pairs: &HashMap<String, String>) -> PolicyInputs {
    seed_inputs(prev, |key| pairs.get(key))
}

/// Seed from optional numeric values, e.g. a JSON request body.
pub fn seed_numeric(prev: PolicyInputs, values: [(PolicyDial, Option<f64>); 4]) -> PolicyInputs {
    values.into_iter().fold(prev, |inputs, (dial, raw)| {
        match raw.and_then(dial_value) {
            Some(value) => inputs.with(dial, value),
            None => inputs,
        }
    })
}
