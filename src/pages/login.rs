//! Admin login page exchanging the admin password for a session token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "csr"))]
use crate::net::types::ApiError;
use crate::state::session::SessionState;

fn validate_password_input(raw: &str) -> Result<&str, &'static str> {
    if raw.trim().is_empty() { Err("Enter the admin password.") } else { Ok(raw) }
}

#[cfg(any(test, feature = "csr"))]
fn login_failed_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected(message) => message.clone(),
        other => format!("Login failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    // Already signed in: skip the form.
    #[cfg(feature = "csr")]
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if session.try_update(SessionState::check_auth).unwrap_or(false) {
                navigate("/admin", NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = password.get();
        let password_value = match validate_password_input(&value) {
            Ok(v) => v.to_owned(),
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::admin_login(&password_value).await {
                    Ok(token) => {
                        session.update(|s| s.set_auth(Some(&token)));
                        password.set(String::new());
                        navigate("/admin", NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("admin login failed: {e}");
                        info.set(login_failed_message(&e));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (password_value, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Gallery Admin"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Admin password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
