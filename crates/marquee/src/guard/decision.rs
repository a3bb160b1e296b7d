//! Access decisions and denial reasons.

use serde::Serialize;

/// Where a denied visitor is sent.
pub const LOGIN_PATH: &str = "/login";
/// Neutral landing page for authenticated but under-privileged visitors.
pub const HOME_PATH: &str = "/";

/// Why access was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// No local session token is present.
    NotAuthenticated,
    /// The authority rejected the stored token.
    ValidationFailed,
    /// Authenticated, but the required elevated role is missing.
    InsufficientRole,
    /// The check sequence failed in an unforeseen way; access fails closed.
    Unexpected,
}

impl DenyReason {
    /// Redirect target for this denial.
    ///
    /// An under-privileged but authenticated user goes back to the home page;
    /// everyone else is sent to login.
    pub fn redirect_target(&self) -> &'static str {
        match self {
            DenyReason::InsufficientRole => HOME_PATH,
            DenyReason::NotAuthenticated
            | DenyReason::ValidationFailed
            | DenyReason::Unexpected => LOGIN_PATH,
        }
    }
}

/// Outcome of an access check.
///
/// `Pending` is the initial state while the check sequence is in flight;
/// `Authorized` and `Unauthorized` are terminal for a given evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The check sequence has not resolved yet.
    Pending,
    /// The protected surface may be served.
    Authorized,
    /// The protected surface must not be served; the visitor is redirected.
    Unauthorized(DenyReason),
}

impl AccessDecision {
    pub fn is_authorized(&self) -> bool {
        matches!(self, AccessDecision::Authorized)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AccessDecision::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_targets() {
        assert_eq!(DenyReason::NotAuthenticated.redirect_target(), LOGIN_PATH);
        assert_eq!(DenyReason::ValidationFailed.redirect_target(), LOGIN_PATH);
        assert_eq!(DenyReason::Unexpected.redirect_target(), LOGIN_PATH);
        assert_eq!(DenyReason::InsufficientRole.redirect_target(), HOME_PATH);
    }

    #[test]
    fn test_decision_predicates() {
        assert!(AccessDecision::Pending.is_pending());
        assert!(AccessDecision::Authorized.is_authorized());
        assert!(!AccessDecision::Unauthorized(DenyReason::Unexpected).is_authorized());
    }
}
