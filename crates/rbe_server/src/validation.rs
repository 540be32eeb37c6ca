use rbe_core::DEFAULT_HORIZON;
use rbe_core::sweep::{MAX_SWEEP_STEPS, MIN_SWEEP_STEPS};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Longest projection the API will compute
pub const MAX_HORIZON: u32 = 200;

/// Sweep resolution when the caller does not ask for one
pub const DEFAULT_SWEEP_STEPS: usize = 11;

/// Validate a projection horizon
pub fn validate_horizon(horizon: u32) -> ApiResult<u32> {
    if horizon > MAX_HORIZON {
        return Err(ApiError::ValidationError {
            field: "horizon".to_string(),
            message: format!("Horizon cannot exceed {MAX_HORIZON} years"),
        });
    }
    Ok(horizon)
}

/// Parse an optional horizon query parameter, defaulting to 30 years
pub fn parse_horizon(raw: Option<&str>) -> ApiResult<u32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_HORIZON);
    };

    let horizon = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| ApiError::ValidationError {
            field: "horizon".to_string(),
            message: format!("Horizon must be a whole number of years, got {raw:?}"),
        })?;

    validate_horizon(horizon)
}

/// Read a horizon from a JSON body field, defaulting to 30 years when absent
pub fn horizon_from_json(raw: Option<&Value>) -> ApiResult<u32> {
    match raw {
        None | Some(Value::Null) => Ok(DEFAULT_HORIZON),
        Some(Value::String(s)) => parse_horizon(Some(s)),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(years) => validate_horizon(u32::try_from(years).unwrap_or(u32::MAX)),
            None => Err(ApiError::ValidationError {
                field: "horizon".to_string(),
                message: format!("Horizon must be a whole number of years, got {n}"),
            }),
        },
        Some(other) => Err(ApiError::ValidationError {
            field: "horizon".to_string(),
            message: format!("Horizon must be a whole number of years, got {other}"),
        }),
    }
}

/// Parse an optional sweep step count
pub fn parse_steps(raw: Option<&str>) -> ApiResult<usize> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_SWEEP_STEPS);
    };

    let steps = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| ApiError::ValidationError {
            field: "steps".to_string(),
            message: format!("Steps must be a whole number, got {raw:?}"),
        })?;

    if !(MIN_SWEEP_STEPS..=MAX_SWEEP_STEPS).contains(&steps) {
        return Err(ApiError::ValidationError {
            field: "steps".to_string(),
            message: format!("Steps must be between {MIN_SWEEP_STEPS} and {MAX_SWEEP_STEPS}"),
        });
    }

    Ok(steps)
}
