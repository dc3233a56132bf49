//! Navigation Component
//!
//! Header navigation bar. Link set is derived from the session state the
//! shell keeps up to date, not from a page-local flag.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🏠"</span>
                        <span class="text-xl font-bold text-white">"DormSpace"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        {move || {
                            if state.is_authenticated() {
                                view! {
                                    <NavLink href="/dashboard" label="Dashboard" />
                                    <NavLink href="/chores" label="Chores" />
                                }.into_view()
                            } else {
                                view! {
                                    <NavLink href="/login" label="Login" />
                                    <A
                                        href="/signup"
                                        class="ml-1 px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                                               text-white font-medium transition-colors"
                                    >
                                        "Sign Up"
                                    </A>
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
