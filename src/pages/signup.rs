//! Signup Page
//!
//! Account creation form. Validates locally before submitting, then POSTs
//! to the backend and redirects to login after a short delay.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::auth;
use crate::components::FormField;
use crate::state::global::GlobalState;
use crate::validate;

/// Signup page component
#[component]
pub fn Signup() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (full_name, set_full_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let u = username.get();
        let f = full_name.get();
        let e = email.get();
        let p = password.get();

        // Advisory pre-validation; no request is issued when it fails
        let local_check = validate::validate_name("Username", &u)
            .and_then(|_| validate::validate_full_name(&f))
            .and_then(|_| validate::validate_email(&e))
            .and_then(|_| validate::validate_password(&p));
        if let Err(msg) = local_check {
            set_error.set(Some(msg));
            return;
        }

        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match auth::register(&u, &f, &e, &p).await {
                Ok(()) => {
                    state.show_success("Account created. Redirecting to login...");
                    gloo_timers::callback::Timeout::new(1200, move || {
                        navigate("/login", Default::default());
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
                <h1 class="text-3xl font-bold">"Create your DormSpace account"</h1>
                <p class="text-gray-400 mt-2">
                    "Sign up to create or join a household and start coordinating with roommates."
                </p>
            </div>

            <form on:submit=on_submit class="space-y-4">
                <FormField label="Username" input_type="text" value=username set_value=set_username />
                <FormField label="Full Name" input_type="text" value=full_name set_value=set_full_name />
                <FormField label="Email" input_type="email" value=email set_value=set_email />
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
                    {move || if submitting.get() { "Creating account..." } else { "Create Account" }}
                </button>
            </form>

            <div class="text-center mt-6">
                <a href="/login" class="text-primary-400 hover:text-primary-300 text-sm">
                    "Already have an account? Sign in"
                </a>
            </div>
        </div>
    }
}
