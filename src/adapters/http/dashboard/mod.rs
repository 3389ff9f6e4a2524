//! Dashboard HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::DashboardAppState;
pub use routes::dashboard_routes;
