use rbe_core::{PolicyDial, PolicyInputs, SweepPoint};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Scenario Types
// ============================================================================

/// Body of `POST /api/scenario`.
///
/// Fields are loose JSON values. Dials that are neither numbers nor numeric
/// strings keep the sandbox defaults; `horizon` is checked by `validation`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRequest {
    pub profit_priority: Option<Value>,
    pub commons_level: Option<Value>,
    pub automation_level: Option<Value>,
    pub eco_constraint: Option<Value>,
    pub horizon: Option<Value>,
}

/// Read a dial from a JSON number or numeric string
fn dial_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() { None } else { s.parse().ok() }
        }
        _ => None,
    }
}

impl ScenarioRequest {
    pub fn dials(&self) -> [(PolicyDial, Option<f64>); 4] {
        [
            (PolicyDial::ProfitPriority, dial_number(self.profit_priority.as_ref())),
            (PolicyDial::CommonsLevel, dial_number(self.commons_level.as_ref())),
            (PolicyDial::AutomationLevel, dial_number(self.automation_level.as_ref())),
            (PolicyDial::EcoConstraint, dial_number(self.eco_constraint.as_ref())),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct SweepResponse {
    pub dial: PolicyDial,
    pub base: PolicyInputs,
    pub points: Vec<SweepPoint>,
}

// ============================================================================
// Visitor Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountResponse {
    pub count: u64,
}
