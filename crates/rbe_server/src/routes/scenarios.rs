use axum::{Router, routing::get};

use crate::handlers::{self, AppState};

pub fn scenario_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/scenario",
            get(handlers::get_scenario).post(handlers::post_scenario),
        )
        // Presets
        .route("/api/presets", get(handlers::list_presets))
        .route("/api/presets/{key}", get(handlers::get_preset))
        // Sensitivity
        .route("/api/sweep/{dial}", get(handlers::sweep))
}
