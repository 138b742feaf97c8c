//! Application chrome: sidebar navigation and the current-user block.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::auth::session::Session;

/// Sidebar + content frame wrapped around every protected page.
///
/// The "Users" link is shown only to admin identities. That is a
/// presentation nicety on `role`, not a security boundary: the service
/// enforces authorization on its own.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();

    let link_class = move |href: &'static str| {
        if location.pathname.get() == href {
            "sidebar__link sidebar__link--active"
        } else {
            "sidebar__link"
        }
    };

    let email = move || {
        session
            .state()
            .get()
            .identity
            .map_or_else(String::new, |user| user.email)
    };
    let initial = move || {
        email()
            .chars()
            .next()
            .map_or('U', |c| c.to_ascii_uppercase())
            .to_string()
    };

    let on_logout = move |_| {
        // The route guard notices the cleared session and redirects.
        session.logout();
    };

    view! {
        <div class="app-shell">
            <aside class="sidebar">
                <div class="sidebar__brand">"KYC Extractor"</div>

                <nav class="sidebar__nav">
                    <a href="/" class=move || link_class("/")>
                        "Dashboard"
                    </a>
                    <a href="/upload" class=move || link_class("/upload")>
                        "Upload"
                    </a>
                    <a href="/history" class=move || link_class("/history")>
                        "History"
                    </a>
                    <Show when=move || session.state().get().is_admin()>
                        <a href="/users" class=move || link_class("/users")>
                            "Users"
                        </a>
                    </Show>
                </nav>

                <div class="sidebar__user">
                    <span class="sidebar__avatar">{initial}</span>
                    <span class="sidebar__email">{email}</span>
                    <button class="sidebar__logout" title="Sign out" on:click=on_logout>
                        "Sign out"
                    </button>
                </div>
            </aside>

            <main class="app-shell__content">{children()}</main>
        </div>
    }
}
