//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::auth::guard::ProtectedShell;
use crate::auth::session::Session;
use crate::pages::dashboard::DashboardPage;
use crate::pages::extraction::ExtractionDetailsPage;
use crate::pages::history::HistoryPage;
use crate::pages::login::LoginPage;
use crate::pages::upload::UploadPage;
use crate::pages::users::UsersPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store, runs bootstrap once before any route decision,
/// and wraps every route except `/login` in the protected shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    provide_context(session);

    // Validate any stored credential before the guard makes its first
    // redirect decision. Deduplicated inside the store.
    Effect::new(move || session.bootstrap());

    view! {
        <Stylesheet id="leptos" href="/pkg/kyc-dashboard.css"/>
        <Title text="KYC Extractor"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedShell>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("upload") view=UploadPage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                    <Route path=(StaticSegment("history"), ParamSegment("id")) view=ExtractionDetailsPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
