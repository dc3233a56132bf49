//! Email Verification Page
//!
//! Redeems the verification token from the URL query string automatically
//! on mount. A missing token is an immediate error with no network call.

use leptos::*;
use leptos_router::{use_navigate, use_query_map};

use crate::api::auth;

/// Verification flow state. Success is terminal; it is followed by a
/// redirect to the login page.
#[derive(Clone, Copy, PartialEq)]
enum Status {
    Verifying,
    Success,
    Error,
}

/// Email verification page component
#[component]
pub fn VerifyEmail() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();

    let (status, set_status) = create_signal(Status::Verifying);
    let (message, set_message) = create_signal(String::new());

    // One-shot guard: effects can re-run, the request must not
    let started = store_value(false);

    let navigate_for_effect = navigate.clone();
    create_effect(move |_| {
        if started.get_value() {
            return;
        }
        started.set_value(true);

        let token = query.get_untracked().get("email_verification_token").cloned();
        let token = match token.filter(|t| !t.is_empty()) {
            Some(t) => t,
            None => {
                set_status.set(Status::Error);
                set_message.set("Verification token is missing".to_string());
                return;
            }
        };

        let navigate = navigate_for_effect.clone();
        spawn_local(async move {
            match auth::verify_email(&token).await {
                Ok(msg) => {
                    set_status.set(Status::Success);
                    set_message.set(msg);
                    gloo_timers::callback::Timeout::new(3000, move || {
                        navigate("/login", Default::default());
                    })
                    .forget();
                }
                Err(msg) => {
                    set_status.set(Status::Error);
                    set_message.set(msg);
                }
            }
        });
    });

    view! {
        <div class="max-w-md mx-auto py-16 text-center">
            {move || match status.get() {
                Status::Verifying => view! {
                    <div class="space-y-4">
                        <div class="loading-spinner w-12 h-12 mx-auto" />
                        <h1 class="text-2xl font-semibold">"Verifying your email..."</h1>
                    </div>
                }.into_view(),
                Status::Success => view! {
                    <div class="space-y-4">
                        <div class="text-6xl">"✅"</div>
                        <h1 class="text-3xl font-bold">"Email Verified!"</h1>
                        <p class="text-gray-400">{message.get()}</p>
                        <div class="bg-green-900/40 border border-green-700 text-green-300 rounded-lg px-4 py-3 text-sm">
                            "Redirecting to login..."
                        </div>
                        <GoToLogin />
                    </div>
                }.into_view(),
                Status::Error => view! {
                    <div class="space-y-4">
                        <div class="text-6xl">"❌"</div>
                        <h1 class="text-3xl font-bold">"Verification Failed"</h1>
                        <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-3 text-sm">
                            {message.get()}
                        </div>
                        <GoToLogin />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn GoToLogin() -> impl IntoView {
    view! {
        <a
            href="/login"
            class="inline-block px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
        >
            "Go to Login"
        </a>
    }
}
