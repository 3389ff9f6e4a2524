//! The session-gate redirect decision.
//!
//! Every request passes through the gate before reaching a handler. The
//! decision is a pure function of two inputs, (is a user resolved?, which
//! path was requested?), so the policy is testable without HTTP plumbing
//! and redirects are values interpreted by the routing layer rather than
//! control flow thrown from inside it.
//!
//! The policy is deliberately binary: exactly one public path exists (the
//! login page) and every other path is protected. No further public routes
//! are inferred.

/// The single public path. Anonymous requests anywhere else redirect here.
pub const LOGIN_PATH: &str = "/auth";

/// Where authenticated users land when they hit the login path.
pub const HOME_PATH: &str = "/";

/// Outcome of the per-request gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// No user and the path is protected: send to the login page.
    RedirectToLogin,
    /// A user is present on the login page: send home.
    RedirectToHome,
    /// Let the request through, with the auth context attached downstream.
    PassThrough,
}

/// Evaluates the gate for one request.
///
/// `user_present` is whether the identity backend resolved a user for the
/// session token. Resolution *failures* count as no user; the caller must
/// fold errors into `false` rather than aborting the request.
pub fn decide(user_present: bool, path: &str) -> GateDecision {
    let on_login_page = path == LOGIN_PATH;

    match (user_present, on_login_page) {
        (false, false) => GateDecision::RedirectToLogin,
        (true, true) => GateDecision::RedirectToHome,
        _ => GateDecision::PassThrough,
    }
}
