pub mod scenario_handlers;
pub mod visitor_handlers;

use std::sync::Arc;

pub use scenario_handlers::*;
pub use visitor_handlers::*;

use crate::counter::VisitCounter;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub counter: Arc<dyn VisitCounter>,
}

impl AppState {
    pub fn new(counter: impl VisitCounter + 'static) -> Self {
        Self {
            counter: Arc::new(counter),
        }
    }
}
