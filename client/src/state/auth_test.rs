use super::*;

fn credentials() -> Credentials {
    Credentials { username: "op".to_owned(), password: "pw".to_owned() }
}

#[test]
fn default_state_is_loading_and_unauthenticated() {
    let state = AuthState::default();
    assert_eq!(state.phase, AuthPhase::Unauthenticated);
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn successful_probe_caches_credentials() {
    let state = AuthState::authenticated(credentials());
    assert_eq!(state.phase, AuthPhase::Authenticated);
    assert_eq!(state.credentials.as_ref().map(|c| c.username.as_str()), Some("op"));
    assert_eq!(state.error, None);
}

#[test]
fn probe_401_maps_to_invalid_credentials_message() {
    let state = AuthState::login_failed(&ApiError::Unauthorized);
    assert_eq!(state.phase, AuthPhase::Unauthenticated);
    assert_eq!(state.credentials, None);
    assert_eq!(state.error.as_deref(), Some("Invalid username or password."));
}

#[test]
fn probe_backend_error_maps_to_generic_auth_failure() {
    let error = ApiError::Backend { status: 503, detail: "maintenance".to_owned() };
    assert_eq!(login_error_message(&error), "Authentication failed. Please try again.");
}

#[test]
fn probe_network_error_maps_to_connectivity_message() {
    let error = ApiError::Network("dns".to_owned());
    assert_eq!(login_error_message(&error), "Could not reach the server. Check your connection.");
}

#[test]
fn logged_out_state_has_no_credentials_and_no_error() {
    let state = AuthState::logged_out();
    assert_eq!(state.phase, AuthPhase::Unauthenticated);
    assert_eq!(state.credentials, None);
    assert_eq!(state.error, None);
    assert!(!state.loading);
}

#[test]
fn redirect_only_after_restore_settles() {
    assert!(!should_redirect_to_login(&AuthState::default()));
    assert!(should_redirect_to_login(&AuthState::logged_out()));
    assert!(!should_redirect_to_login(&AuthState::authenticated(credentials())));
}

#[test]
fn authenticating_still_counts_as_unauthenticated_for_guards() {
    // The probe runs while the login page is shown; protected pages stay
    // guarded until it succeeds.
    assert!(should_redirect_to_login(&AuthState::authenticating()));
}
