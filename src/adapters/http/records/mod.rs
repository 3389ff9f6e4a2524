//! Records HTTP adapter module.
//!
//! Per-user persistence: dashboard settings and the daily log.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::RecordsAppState;
pub use routes::record_routes;
