//! Route guard: gates protected pages on session state.
//!
//! The decision itself ([`decide`]) is a pure function of the session
//! snapshot so the contract is testable in isolation; [`ProtectedShell`]
//! wires it into the router and records the attempted path for post-login
//! resume.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::session::{Session, SessionState};
use crate::components::layout::Layout;

/// Per-navigation outcome for a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// A credential is held; render the page. Identity may still be
    /// unresolved (optimistic rendering after bootstrap).
    Render,
    /// Bootstrap has not completed; render a neutral state, neither the
    /// page nor the login screen.
    Defer,
    /// No credential after bootstrap; record the destination and redirect
    /// to the login screen.
    RedirectToLogin,
}

/// Decide whether a protected route may render for the given session.
pub fn decide(state: &SessionState) -> RouteDecision {
    if !state.resolved {
        RouteDecision::Defer
    } else if state.is_authenticated() {
        RouteDecision::Render
    } else {
        RouteDecision::RedirectToLogin
    }
}

/// The route a visitor tried to reach before being redirected to login.
/// A single transient value: recording overwrites, taking consumes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingDestination(Option<String>);

impl PendingDestination {
    /// Remember an attempted path. The latest attempt wins.
    pub fn record(&mut self, path: &str) {
        self.0 = Some(path.to_owned());
    }

    /// Consume the recorded path, leaving nothing behind.
    pub fn take(&mut self) -> Option<String> {
        self.0.take()
    }

    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }
}

/// Layout wrapper for every protected route.
///
/// Applies [`decide`] reactively: renders the app layout with the matched
/// child route once a credential is present, shows a neutral shell while
/// bootstrap is pending, and otherwise records the attempted path and
/// navigates to `/login`.
#[component]
pub fn ProtectedShell() -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();
    let navigate = use_navigate();

    // Redirect to login once the session resolves without a credential.
    Effect::new(move || {
        if decide(&session.state().get()) == RouteDecision::RedirectToLogin {
            let path = location.pathname.get_untracked();
            let search = location.search.get_untracked();
            let attempted = if search.is_empty() {
                path
            } else {
                format!("{path}?{search}")
            };
            session.remember_destination(&attempted);
            navigate("/login", NavigateOptions::default());
        }
    });

    move || match decide(&session.state().get()) {
        RouteDecision::Render => view! {
            <Layout>
                <Outlet/>
            </Layout>
        }
        .into_any(),
        RouteDecision::Defer | RouteDecision::RedirectToLogin => {
            view! { <div class="app-shell app-shell--resolving"></div> }.into_any()
        }
    }
}
