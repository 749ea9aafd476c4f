//! Admin access guard
//!
//! Admin commands check for a stored credential before issuing any request.
//! Presence is all that is checked; the server decides whether the
//! credential is still good.

use crate::session::Session;

/// Result of checking the session before an admin command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// A credential is stored; continue
    Allow,
    /// No credential; the user has to log in first
    RedirectToLogin,
}

/// Guard for admin-only commands
pub struct AdminGuard;

impl AdminGuard {
    pub async fn check(session: &Session) -> GuardDecision {
        if session.is_present().await {
            GuardDecision::Allow
        } else {
            log::debug!("No stored credential, redirecting to login");
            GuardDecision::RedirectToLogin
        }
    }
}
