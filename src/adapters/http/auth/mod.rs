//! Auth HTTP adapter module.
//!
//! Exposes the one public path (`/auth`) plus logout.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AuthAppState;
pub use routes::auth_routes;
