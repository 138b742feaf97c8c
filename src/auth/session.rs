//! The session store: single source of truth for "is anyone logged in,
//! and who".
//!
//! [`SessionState`] is a plain value with pure transition methods so the
//! lifecycle rules are testable without a browser. [`Session`] wraps it in
//! a signal, pairs every storage write with the matching in-memory update,
//! and drives the async `bootstrap`/`login` flows. Exactly one bootstrap
//! runs per page load; duplicate calls are no-ops.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::auth::guard::PendingDestination;
use crate::net::error::ApiError;
use crate::net::types::User;

/// Snapshot of the authentication session.
///
/// Invariant: `identity` is only ever set while `credential` is set, and
/// only from a successful identity lookup against the service.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Opaque bearer token, mirrored in `localStorage`.
    pub credential: Option<String>,
    /// User record resolved via the identity endpoint. Never persisted.
    pub identity: Option<User>,
    /// True once bootstrap has completed, successfully or not. Protected
    /// content must not render while this is false.
    pub resolved: bool,
    bootstrap_started: bool,
}

/// Result of an identity lookup, classified the way the session store
/// reacts to it: only a definitive rejection invalidates the credential.
#[derive(Clone, Debug, PartialEq)]
pub enum IdentityOutcome {
    /// The service recognized the credential and returned the user record.
    Verified(User),
    /// The service rejected the credential (expired, revoked, forged).
    Rejected,
    /// The lookup failed for reasons that say nothing about the credential
    /// (network down, server fault, malformed body).
    Unreachable,
}

impl IdentityOutcome {
    /// Classify the result of a `/auth/me` call.
    pub fn from_lookup(result: Result<User, ApiError>) -> Self {
        match result {
            Ok(user) => Self::Verified(user),
            Err(ApiError::Unauthorized) => Self::Rejected,
            Err(_) => Self::Unreachable,
        }
    }
}

impl SessionState {
    /// Claim the one bootstrap slot. Returns false if bootstrap has
    /// already started this process; callers must then do nothing.
    pub fn begin_bootstrap(&mut self) -> bool {
        if self.bootstrap_started {
            return false;
        }
        self.bootstrap_started = true;
        true
    }

    /// Install a credential (restored from storage, or fresh from login).
    /// The identity is left for a follow-up lookup to fill in.
    pub fn set_credential(&mut self, token: String) {
        self.credential = Some(token);
    }

    /// Finish bootstrap when no credential was stored.
    pub fn mark_resolved(&mut self) {
        self.resolved = true;
    }

    /// Apply the outcome of an identity lookup and mark the session
    /// resolved. A rejection clears the credential; an unreachable service
    /// leaves it alone so a flaky network cannot log the user out.
    pub fn apply_identity_outcome(&mut self, outcome: IdentityOutcome) {
        match outcome {
            IdentityOutcome::Verified(user) => self.identity = Some(user),
            IdentityOutcome::Rejected => {
                self.credential = None;
                self.identity = None;
            }
            IdentityOutcome::Unreachable => {}
        }
        self.resolved = true;
    }

    /// Drop the credential and identity. Used by logout and by the HTTP
    /// adapter when any endpoint answers 401 mid-session.
    pub fn clear(&mut self) {
        self.credential = None;
        self.identity = None;
    }

    /// Whether a credential is currently held. Identity may still be
    /// unresolved; the guard renders optimistically once bootstrap is done.
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// Whether the resolved identity has the admin role.
    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(User::is_admin)
    }
}

/// Shared handle to the session store, provided via context from the root
/// component. Cheap to copy; all clones observe the same state.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
    pending: RwSignal<PendingDestination>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            pending: RwSignal::new(PendingDestination::default()),
        }
    }

    /// Reactive access to the session state for components.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Current snapshot without registering a reactive dependency.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// The bearer token to attach to outbound requests, if any.
    pub fn credential(&self) -> Option<String> {
        self.state.with_untracked(|s| s.credential.clone())
    }

    /// Remember the route a visitor tried to reach before being sent to
    /// the login screen. The latest attempt wins.
    pub fn remember_destination(&self, path: &str) {
        self.pending.update(|p| p.record(path));
    }

    /// Consume the pending destination, if one was recorded.
    pub fn take_destination(&self) -> Option<String> {
        self.pending.try_update(PendingDestination::take).flatten()
    }

    /// Validate any stored credential against the identity endpoint, then
    /// mark the session resolved. Runs at most once per page load; the
    /// route guard holds all navigation until it completes.
    pub fn bootstrap(self) {
        let started = self
            .state
            .try_update(SessionState::begin_bootstrap)
            .unwrap_or(false);
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = crate::auth::storage::read_token() else {
                self.state.update(SessionState::mark_resolved);
                return;
            };
            self.state.update(|s| s.set_credential(token));

            let result = crate::net::api::fetch_current_user(self).await;
            let outcome = IdentityOutcome::from_lookup(result);
            if outcome == IdentityOutcome::Rejected {
                // The adapter's 401 hook has already cleared storage; this
                // keeps the state transition explicit and idempotent.
                crate::auth::storage::clear_token();
            }
            self.state.update(|s| s.apply_identity_outcome(outcome));
        });

        #[cfg(not(feature = "hydrate"))]
        self.state.update(SessionState::mark_resolved);
    }

    /// Exchange credentials for a token, persist it, and resolve the
    /// identity. On rejection the session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// `ApiError::Unauthorized` for bad credentials (including a token the
    /// identity endpoint immediately rejects); other variants for
    /// transport, validation, and server failures. A failed identity
    /// lookup that is not a rejection still counts as a successful login;
    /// the token is kept and the identity stays unresolved.
    pub async fn login(self, email: &str, secret: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let token = crate::net::api::login(self, email, secret).await?;

            // Persisted and in-memory credential change in the same
            // synchronous step.
            crate::auth::storage::write_token(&token.access_token);
            self.state.update(|s| s.set_credential(token.access_token));

            let result = crate::net::api::fetch_current_user(self).await;
            match IdentityOutcome::from_lookup(result) {
                IdentityOutcome::Verified(user) => {
                    self.state
                        .update(|s| s.apply_identity_outcome(IdentityOutcome::Verified(user)));
                    Ok(())
                }
                IdentityOutcome::Rejected => {
                    // The adapter hook already rolled the session back.
                    Err(ApiError::Unauthorized)
                }
                IdentityOutcome::Unreachable => {
                    leptos::logging::warn!("login: identity lookup unreachable, keeping token");
                    Ok(())
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, secret);
            Err(ApiError::Network("login requires a browser".to_owned()))
        }
    }

    /// Forget the credential and identity. Idempotent, never touches the
    /// network.
    pub fn logout(&self) {
        crate::auth::storage::clear_token();
        self.state.update(SessionState::clear);
    }

    /// Cross-cutting unauthorized handler: any endpoint answering 401
    /// invalidates the session, exactly like a rejected bootstrap.
    pub fn clear_unauthorized(&self) {
        crate::auth::storage::clear_token();
        self.state.update(SessionState::clear);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
