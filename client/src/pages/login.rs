//! Login page for the operator console.
//!
//! The form never validates credentials locally: it probes the protected
//! categories endpoint with the supplied username/password and lets the
//! backend's response decide.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthPhase, AuthState};

/// Trim and require both fields before a probe is attempted.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Already signed in (or restored from sessionStorage): go to the console.
    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    let busy = move || auth.get().phase == AuthPhase::Authenticating;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    auth.update(|state| {
                        state.error = Some(message.to_owned());
                        state.loading = false;
                    });
                    return;
                }
            };
        auth.set(AuthState::authenticating());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let candidate = crate::net::types::Credentials {
                username: username_value,
                password: password_value,
            };
            match crate::net::api::fetch_categories(&candidate).await {
                Ok(_) => {
                    crate::util::credentials::save(&candidate);
                    auth.set(AuthState::authenticated(candidate));
                }
                Err(error) => auth.set(AuthState::login_failed(&error)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Showcase Admin"</h1>
                <p class="login-card__subtitle">"Sign in to manage site examples"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || auth.get().error.is_some()>
                    <p class="login-message login-message--error">
                        {move || auth.get().error.unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
