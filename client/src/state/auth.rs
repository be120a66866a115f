//! Auth-gate state machine for the operator session.
//!
//! DESIGN
//! ======
//! The gate never validates credentials itself: login probes a protected
//! listing endpoint and interprets the response. A 401 on that probe means
//! invalid credentials; a 401 on any later request forces a session logout.
//! `loading` covers the window before cached credentials have been restored
//! from `sessionStorage`, so route guards don't redirect prematurely.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::Credentials;

/// Where the session currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Unauthenticated,
    /// A login probe is in flight.
    Authenticating,
    Authenticated,
}

/// Authentication state shared via context.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub phase: AuthPhase,
    /// Cached credentials, present only while `Authenticated`.
    pub credentials: Option<Credentials>,
    /// Inline error for the login form.
    pub error: Option<String>,
    /// True until session restore has been attempted on the browser side.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { phase: AuthPhase::Unauthenticated, credentials: None, error: None, loading: true }
    }
}

impl AuthState {
    /// Operator submitted the form; probe in flight.
    pub fn authenticating() -> Self {
        Self { phase: AuthPhase::Authenticating, credentials: None, error: None, loading: false }
    }

    /// Probe succeeded; credentials are cached for the session.
    pub fn authenticated(credentials: Credentials) -> Self {
        Self {
            phase: AuthPhase::Authenticated,
            credentials: Some(credentials),
            error: None,
            loading: false,
        }
    }

    /// Probe failed; back to the form with an inline message.
    pub fn login_failed(error: &ApiError) -> Self {
        Self {
            phase: AuthPhase::Unauthenticated,
            credentials: None,
            error: Some(login_error_message(error).to_owned()),
            loading: false,
        }
    }

    /// No session: explicit logout, forced logout, or nothing to restore.
    pub fn logged_out() -> Self {
        Self { phase: AuthPhase::Unauthenticated, credentials: None, error: None, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }
}

/// Whether a protected page should bounce to `/login`.
pub fn should_redirect_to_login(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Map a login-probe failure onto the inline form message.
pub fn login_error_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Unauthorized => "Invalid username or password.",
        ApiError::Backend { .. } => "Authentication failed. Please try again.",
        ApiError::Network(_) => "Could not reach the server. Check your connection.",
    }
}

/// Session-level logout: clear the credential cache and the gate state.
///
/// Invoked on explicit logout and whenever any request answers 401
/// mid-session.
pub fn force_logout(auth: RwSignal<AuthState>) {
    crate::util::credentials::clear();
    auth.set(AuthState::logged_out());
}
