use super::*;

fn user() -> User {
    User {
        id: 7,
        email: "admin@example.com".to_owned(),
        full_name: Some("Admin".to_owned()),
        role: "admin".to_owned(),
        is_active: true,
        last_login: None,
    }
}

fn with_stored_credential() -> SessionState {
    let mut state = SessionState::default();
    assert!(state.begin_bootstrap());
    state.set_credential("tok-1".to_owned());
    state
}

// =============================================================
// Bootstrap
// =============================================================

#[test]
fn bootstrap_runs_at_most_once() {
    let mut state = SessionState::default();
    assert!(state.begin_bootstrap());
    assert!(!state.begin_bootstrap());
    assert!(!state.begin_bootstrap());
}

#[test]
fn bootstrap_without_stored_credential_resolves_logged_out() {
    let mut state = SessionState::default();
    state.begin_bootstrap();
    state.mark_resolved();

    assert!(state.resolved);
    assert!(state.credential.is_none());
    assert!(state.identity.is_none());
}

#[test]
fn verified_identity_keeps_credential() {
    let mut state = with_stored_credential();
    state.apply_identity_outcome(IdentityOutcome::Verified(user()));

    assert!(state.resolved);
    assert_eq!(state.credential.as_deref(), Some("tok-1"));
    assert_eq!(state.identity, Some(user()));
}

#[test]
fn rejected_credential_clears_session() {
    let mut state = with_stored_credential();
    state.apply_identity_outcome(IdentityOutcome::Rejected);

    assert!(state.resolved);
    assert!(state.credential.is_none());
    assert!(state.identity.is_none());
}

#[test]
fn unreachable_identity_endpoint_keeps_credential() {
    let mut state = with_stored_credential();
    state.apply_identity_outcome(IdentityOutcome::Unreachable);

    assert!(state.resolved);
    assert_eq!(state.credential.as_deref(), Some("tok-1"));
    assert!(state.identity.is_none());
}

// =============================================================
// Identity lookup classification
// =============================================================

#[test]
fn lookup_ok_is_verified() {
    let outcome = IdentityOutcome::from_lookup(Ok(user()));
    assert_eq!(outcome, IdentityOutcome::Verified(user()));
}

#[test]
fn lookup_unauthorized_is_rejected() {
    let outcome = IdentityOutcome::from_lookup(Err(ApiError::Unauthorized));
    assert_eq!(outcome, IdentityOutcome::Rejected);
}

#[test]
fn lookup_network_or_server_failure_is_unreachable() {
    let network = IdentityOutcome::from_lookup(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(network, IdentityOutcome::Unreachable);

    let server = IdentityOutcome::from_lookup(Err(ApiError::Server { status: 503 }));
    assert_eq!(server, IdentityOutcome::Unreachable);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_sets_credential_then_identity() {
    let mut state = SessionState::default();
    state.begin_bootstrap();
    state.mark_resolved();

    state.set_credential("tok-2".to_owned());
    state.apply_identity_outcome(IdentityOutcome::Verified(user()));

    assert!(state.is_authenticated());
    assert_eq!(state.identity, Some(user()));
}

#[test]
fn login_rejected_by_identity_lookup_rolls_back() {
    let mut state = SessionState::default();
    state.begin_bootstrap();
    state.mark_resolved();

    state.set_credential("tok-stale".to_owned());
    state.apply_identity_outcome(IdentityOutcome::Rejected);

    assert!(!state.is_authenticated());
    assert!(state.identity.is_none());
}

// =============================================================
// Logout and mid-session invalidation
// =============================================================

#[test]
fn clear_drops_credential_and_identity() {
    let mut state = with_stored_credential();
    state.apply_identity_outcome(IdentityOutcome::Verified(user()));

    state.clear();
    assert!(state.credential.is_none());
    assert!(state.identity.is_none());
    // A completed bootstrap stays completed.
    assert!(state.resolved);
}

#[test]
fn clear_is_idempotent() {
    let mut state = SessionState::default();
    state.clear();
    state.clear();
    assert_eq!(state, SessionState::default());
}

// =============================================================
// Role helpers
// =============================================================

#[test]
fn admin_flag_requires_resolved_admin_identity() {
    let mut state = with_stored_credential();
    assert!(!state.is_admin());

    state.apply_identity_outcome(IdentityOutcome::Verified(user()));
    assert!(state.is_admin());

    let mut plain = user();
    plain.role = "user".to_owned();
    state.identity = Some(plain);
    assert!(!state.is_admin());
}
