//! Join Group Page
//!
//! Redeems an invite token from the URL query string automatically on
//! mount. A missing token short-circuits to the error state without any
//! network call.

use leptos::*;
use leptos_router::{use_navigate, use_query_map};

use crate::api::groups;

#[derive(Clone, Copy, PartialEq)]
enum Status {
    Joining,
    Success,
    Error,
}

/// A missing or empty query token means no request is made at all.
fn usable_token(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}

/// Join-group page component
#[component]
pub fn JoinGroup() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();

    let (status, set_status) = create_signal(Status::Joining);
    let (message, set_message) = create_signal(String::new());
    let (group_name, set_group_name) = create_signal(None::<String>);

    // One-shot guard: effects can re-run, the request must not
    let started = store_value(false);

    let navigate_for_effect = navigate.clone();
    create_effect(move |_| {
        if started.get_value() {
            return;
        }
        started.set_value(true);

        let token = usable_token(query.get_untracked().get("invite_token").cloned());
        let token = match token {
            Some(t) => t,
            None => {
                set_status.set(Status::Error);
                set_message.set("Invite token is missing".to_string());
                return;
            }
        };

        let navigate = navigate_for_effect.clone();
        spawn_local(async move {
            match groups::join_group(&token).await {
                Ok((msg, name)) => {
                    set_status.set(Status::Success);
                    set_message.set(msg);
                    set_group_name.set(name);
                    gloo_timers::callback::Timeout::new(3000, move || {
                        navigate("/dashboard", Default::default());
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
                Status::Joining => view! {
                    <div class="space-y-4">
                        <div class="loading-spinner w-12 h-12 mx-auto" />
                        <h1 class="text-2xl font-semibold">"Joining group..."</h1>
                    </div>
                }.into_view(),
                Status::Success => view! {
                    <div class="space-y-4">
                        <div class="text-6xl">"🎉"</div>
                        <h1 class="text-3xl font-bold">"Welcome to the Group!"</h1>
                        {group_name.get().map(|name| view! {
                            <p class="text-xl text-gray-300">{name}</p>
                        })}
                        <p class="text-gray-400">{message.get()}</p>
                        <div class="bg-green-900/40 border border-green-700 text-green-300 rounded-lg px-4 py-3 text-sm">
                            "Redirecting to dashboard..."
                        </div>
                        <GoToDashboard />
                    </div>
                }.into_view(),
                Status::Error => view! {
                    <div class="space-y-4">
                        <div class="text-6xl">"❌"</div>
                        <h1 class="text-3xl font-bold">"Failed to Join Group"</h1>
                        <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-3 text-sm">
                            {message.get()}
                        </div>
                        <p class="text-sm text-gray-400">
                            "You may already be in a group, or the invite link may be invalid or expired."
                        </p>
                        <GoToDashboard />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn GoToDashboard() -> impl IntoView {
    view! {
        <a
            href="/dashboard"
            class="inline-block px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
        >
            "Go to Dashboard"
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_short_circuits() {
        assert_eq!(usable_token(None), None);
    }

    #[test]
    fn empty_token_short_circuits() {
        assert_eq!(usable_token(Some(String::new())), None);
    }

    #[test]
    fn present_token_passes_through() {
        assert_eq!(
            usable_token(Some("abc123".to_string())),
            Some("abc123".to_string())
        );
    }
}
