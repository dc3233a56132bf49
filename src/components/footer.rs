//! Footer Component

use chrono::Datelike;
use leptos::*;

/// Site footer
#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-4 px-4 mt-auto">
            <div class="container mx-auto text-center text-sm text-gray-400">
                {format!("© {} DormSpace. All rights reserved.", year)}
            </div>
        </footer>
    }
}
