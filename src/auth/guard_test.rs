use super::*;

fn resolved_with_credential() -> SessionState {
    let mut state = SessionState::default();
    state.begin_bootstrap();
    state.set_credential("tok-1".to_owned());
    state.mark_resolved();
    state
}

// =============================================================
// Route decisions
// =============================================================

#[test]
fn defers_while_bootstrap_is_unresolved() {
    let state = SessionState::default();
    assert_eq!(decide(&state), RouteDecision::Defer);
}

#[test]
fn renders_with_credential_even_before_identity_resolves() {
    // Optimistic rendering: bootstrap finished, token present, identity
    // lookup lost to a network failure.
    let mut state = resolved_with_credential();
    state.identity = None;
    assert_eq!(decide(&state), RouteDecision::Render);
}

#[test]
fn redirects_without_credential_after_bootstrap() {
    let mut state = SessionState::default();
    state.begin_bootstrap();
    state.mark_resolved();
    assert_eq!(decide(&state), RouteDecision::RedirectToLogin);
}

#[test]
fn midsession_invalidation_flips_decision_to_redirect() {
    let mut state = resolved_with_credential();
    assert_eq!(decide(&state), RouteDecision::Render);

    // Any endpoint answering 401 clears the session.
    state.clear();
    assert_eq!(decide(&state), RouteDecision::RedirectToLogin);
}

// =============================================================
// Pending destination
// =============================================================

#[test]
fn pending_destination_is_read_once() {
    let mut pending = PendingDestination::default();
    pending.record("/upload");

    assert_eq!(pending.take(), Some("/upload".to_owned()));
    assert_eq!(pending.take(), None);
}

#[test]
fn pending_destination_latest_attempt_wins() {
    let mut pending = PendingDestination::default();
    pending.record("/upload");
    pending.record("/history?skip=10");

    assert_eq!(pending.take(), Some("/history?skip=10".to_owned()));
}

#[test]
fn pending_destination_absent_by_default() {
    let mut pending = PendingDestination::default();
    assert!(!pending.is_some());
    assert_eq!(pending.take(), None);
}
