//! HTTP middleware.

pub mod session_gate;

pub use session_gate::{
    session_gate, CurrentUser, GateState, RequireUser, SessionRejection, SESSION_COOKIE,
};
