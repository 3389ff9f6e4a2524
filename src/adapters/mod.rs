//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Identity backends (GoTrue, mock)
//! - `weather`, `lotto`, `github` - Upstream widget providers
//! - `postgres` - Record stores
//! - `http` - The REST surface
//!
//! The mock adapters live here too, as ordinary implementations; tests
//! and local development inject them through the same ports.

pub mod auth;
pub mod github;
pub mod http;
pub mod lotto;
pub mod postgres;
pub mod weather;
