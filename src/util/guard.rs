//! Route guard decision for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`evaluate`] is a pure function of session state and the view's required
//! role. The `Protected` component calls it on every render and performs the
//! navigation itself, so the decision stays testable without a router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::route::AppRoute;
use crate::net::types::Role;
use crate::state::session::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Recovery has not finished; show a neutral placeholder, never redirect.
    Loading,
    /// Show the requested view.
    Render,
    /// Navigate away (replacing history).
    Redirect(AppRoute),
}

/// Decide what a protected view shows.
///
/// 1. still initializing → `Loading`
/// 2. logged out → login page
/// 3. wrong role → the user's own home view
/// 4. otherwise → `Render`
pub fn evaluate(session: &SessionState, required_role: Option<Role>) -> GuardDecision {
    if session.is_initializing() {
        return GuardDecision::Loading;
    }
    let Some(role) = session.role() else {
        return GuardDecision::Redirect(AppRoute::Login);
    };
    match required_role {
        Some(required) if required != role => GuardDecision::Redirect(AppRoute::home_for(role)),
        _ => GuardDecision::Render,
    }
}

/// Guard decision for an arbitrary location path, applying the catch-all.
pub fn evaluate_path(session: &SessionState, path: &str) -> GuardDecision {
    let route = AppRoute::resolve(path);
    if !route.is_protected() {
        return GuardDecision::Render;
    }
    evaluate(session, route.required_role())
}
