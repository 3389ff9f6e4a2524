//! Widget HTTP adapter module.
//!
//! Server-side proxies for the upstream widget data: weather, lottery,
//! and contribution calendar.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::WidgetsAppState;
pub use routes::widget_routes;
