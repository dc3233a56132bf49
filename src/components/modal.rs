//! Modal Component
//!
//! Shared dialog chrome: overlay, card, title row with close button.
//! Pages supply the body (usually a form) as children.

use leptos::*;

/// Modal dialog wrapper
#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">{title}</h2>
                    <button
                        on:click=move |_| on_close.call(())
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                {children()}
            </div>
        </div>
    }
}
