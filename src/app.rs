//! Root application component with routing, the shared session, and the
//! admin route guard.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{admin::AdminPage, login::LoginPage};
use crate::state::session::SessionState;
use crate::util::route_guard::{RouteGuard, install_route_guard};
use crate::util::token_store::LocalTokenStore;

/// Root application component.
///
/// Owns the one `SessionState` for the tab; every page reads it from context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Sync the cached flag with storage once the client is up.
    Effect::new(move || {
        session.update(|s| {
            s.check_auth();
        });
    });

    view! {
        <Title text="Gallery"/>

        <Router>
            <AdminRouteGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}

/// Installs the `/admin` guard; renders nothing.
#[component]
fn AdminRouteGuard() -> impl IntoView {
    install_route_guard(RouteGuard::default(), LocalTokenStore::default(), use_navigate());
}
