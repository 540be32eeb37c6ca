use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, rejection::JsonRejection},
};
use rbe_core::seed::seed_numeric;
use rbe_core::{
    PRESETS, PolicyDial, PolicyInputs, Preset, ScenarioReport, find_preset, seed_from_pairs,
    sweep_dial,
};

use crate::error::ApiResult;
use crate::models::{ScenarioRequest, SweepResponse};
use crate::validation;

type QueryParams = HashMap<String, String>;

fn query_value<'a>(params: &'a QueryParams, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str)
}

// ============================================================================
// Scenario Handlers
// ============================================================================

/// `GET /api/scenario?profitPriority=..&horizon=..`
pub async fn get_scenario(Query(params): Query<QueryParams>) -> ApiResult<Json<ScenarioReport>> {
    let horizon = validation::parse_horizon(query_value(&params, "horizon"))?;
    let inputs = seed_from_pairs(PolicyInputs::default(), &params);

    tracing::debug!(?inputs, horizon, "evaluating scenario from query");
    Ok(Json(ScenarioReport::build(inputs, horizon)))
}

/// `POST /api/scenario`
pub async fn post_scenario(
    payload: Result<Json<ScenarioRequest>, JsonRejection>,
) -> ApiResult<Json<ScenarioReport>> {
    let Json(req) = payload?;
    let horizon = validation::horizon_from_json(req.horizon.as_ref())?;
    let inputs = seed_numeric(PolicyInputs::default(), req.dials());

    tracing::debug!(?inputs, horizon, "evaluating scenario from body");
    Ok(Json(ScenarioReport::build(inputs, horizon)))
}

// ============================================================================
// Preset Handlers
// ============================================================================

pub async fn list_presets() -> Json<Vec<Preset>> {
    Json(PRESETS.to_vec())
}

/// `GET /api/presets/{key}?horizon=..`
pub async fn get_preset(
    Path(key): Path<String>,
    Query(params): Query<QueryParams>,
) -> ApiResult<Json<ScenarioReport>> {
    let preset = find_preset(&key)?;
    let horizon = validation::parse_horizon(query_value(&params, "horizon"))?;

    Ok(Json(ScenarioReport::build(preset.inputs, horizon)))
}

// ============================================================================
// Sweep Handlers
// ============================================================================

/// `GET /api/sweep/{dial}?steps=..&profitPriority=..`
pub async fn sweep(
    Path(dial): Path<String>,
    Query(params): Query<QueryParams>,
) -> ApiResult<Json<SweepResponse>> {
    let dial: PolicyDial = dial.parse()?;
    let steps = validation::parse_steps(query_value(&params, "steps"))?;
    let base = seed_from_pairs(PolicyInputs::default(), &params);

    let points = sweep_dial(&base, dial, steps)?;
    Ok(Json(SweepResponse {
        dial,
        base,
        points,
    }))
}
