pub mod scenarios;
pub mod visitors;

pub use scenarios::scenario_routes;
pub use visitors::visitor_routes;
