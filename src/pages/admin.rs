//! Admin landing page: review-queue summary and logout.
//!
//! Reached only through the route guard. A token the backend no longer
//! accepts ends the session here, since the client never validates tokens
//! on its own.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{ApiError, PendingSummary};
use crate::state::session::SessionState;

async fn load_summary(token: Option<String>) -> Result<PendingSummary, ApiError> {
    match token {
        Some(token) => crate::net::api::fetch_pending_summary(&token).await,
        None => Err(ApiError::MissingToken),
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let summary = LocalResource::new(move || load_summary(session.with_untracked(SessionState::get_token)));

    // Backend rejected the token: drop it and go back to login.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if let Some(Err(e)) = summary.get() {
                if e.is_unauthorized() {
                    log::info!("admin token rejected by backend, signing out");
                    session.update(SessionState::logout);
                    navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
            }
        });
    }

    let on_logout = move |_| {
        session.update(SessionState::logout);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Gallery Admin"</h1>
                <button class="btn" on:click=on_logout>
                    "Log Out"
                </button>
            </header>
            <Suspense fallback=move || view! { <p>"Loading review queue..."</p> }>
                {move || {
                    summary
                        .get()
                        .map(|result| match result {
                            Ok(s) => format!("{} images awaiting review", s.total),
                            Err(e) => format!("Review queue unavailable: {e}"),
                        })
                }}
            </Suspense>
        </div>
    }
}
