//! Homeboard - Personal Dashboard Backend
//!
//! This crate implements a session-gated personal dashboard: hosted-identity
//! authentication, live widgets proxied from upstream services, and per-user
//! persistence for settings and a daily log.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
