//! Login page: email/password form with an inline error banner.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::session::Session;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;

/// Sign-in form. While bootstrap is unresolved nothing is shown, so an
/// already-authenticated visitor never sees a flash of this screen.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let resume = move || {
        session
            .take_destination()
            .unwrap_or_else(|| "/".to_owned())
    };

    // An already-authenticated visitor has no business here; send them on.
    // Skipped while a login attempt is in flight so navigation waits for
    // the identity lookup instead of firing as soon as the token lands.
    let navigate_away = navigate.clone();
    Effect::new(move || {
        let state = session.state().get();
        if state.resolved && state.is_authenticated() && !submitting.get_untracked() {
            navigate_away(
                &resume(),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            if submitting.get_untracked() {
                return;
            }
            submitting.set(true);
            error.set(None);

            let address = email.get_untracked();
            let secret = password.get_untracked();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.login(&address, &secret).await {
                    Ok(()) => {
                        submitting.set(false);
                        // Identity lookup is done; resume where the visitor
                        // was headed.
                        navigate(
                            &resume(),
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(err) => {
                        // Keep the email, make the secret re-enterable.
                        password.set(String::new());
                        let message = match err {
                            ApiError::Unauthorized => "Invalid email or password".to_owned(),
                            other => other.to_string(),
                        };
                        error.set(Some(message));
                        submitting.set(false);
                    }
                }
            });
        }
    };

    view! {
        <Show
            when=move || session.state().get().resolved
            fallback=|| view! { <div class="app-shell app-shell--resolving"></div> }
        >
            <div class="login-page">
                <div class="login-card">
                    <h1>"Welcome Back"</h1>
                    <p class="login-card__subtitle">"Sign in to access KYC Extractor"</p>

                    {move || {
                        error
                            .get()
                            .map(|msg| view! { <div class="form-error form-error--banner">{msg}</div> })
                    }}

                    <form on:submit=on_submit>
                        <label class="login-card__label">
                            "Email Address"
                            <input
                                type="email"
                                required
                                placeholder="admin@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="login-card__label">
                            "Password"
                            <input
                                type="password"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>

                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
