//! PostgreSQL adapters - Database implementations for record-store ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresSettingsStore` - Per-user dashboard preferences
//! - `PostgresLogStore` - Append-only daily journal entries

mod log_store;
mod settings_store;

pub use log_store::PostgresLogStore;
pub use settings_store::PostgresSettingsStore;
