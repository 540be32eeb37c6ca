use axum::{Router, routing::get};

use crate::handlers::{self, AppState};

pub fn visitor_routes() -> Router<AppState> {
    Router::new().route(
        "/api/visitors",
        get(handlers::get_visitors).post(handlers::record_visit),
    )
}
