//! Login Page
//!
//! Username/password form. On success the shell session is refreshed and
//! the user is sent to the dashboard after a short delay.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::auth;
use crate::components::FormField;
use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let u = username.get();
        let p = password.get();
        if u.is_empty() || p.is_empty() {
            set_error.set(Some("Username and password are required".to_string()));
            return;
        }

        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match auth::login(&u, &p).await {
                Ok(()) => {
                    // The cookie is set now; let the shell learn who we are
                    state.refresh_session();
                    state.show_success("Signed in. Redirecting...");
                    gloo_timers::callback::Timeout::new(800, move || {
                        navigate("/dashboard", Default::default());
                    })
                    .forget();
                }
                Err(msg) => {
                    set_error.set(Some(msg));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="max-w-md mx-auto py-12">
            <div class="text-center mb-8">
                <h1 class="text-3xl font-bold">"Sign in to DormSpace"</h1>
                <p class="text-gray-400 mt-2">"Enter your username and password to continue."</p>
            </div>

            <form on:submit=on_submit class="space-y-4">
                <FormField label="Username" input_type="text" value=username set_value=set_username />
                <FormField label="Password" input_type="password" value=password set_value=set_password />

                {move || {
                    error.get().map(|msg| view! {
                        <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-3 text-sm">
                            {msg}
                        </div>
                    })
                }}

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>

            <div class="text-center mt-6">
                <a href="/signup" class="text-primary-400 hover:text-primary-300 text-sm">
                    "Don't have an account? Sign up"
                </a>
            </div>
        </div>
    }
}
