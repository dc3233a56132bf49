//! Landing Page
//!
//! Static marketing content. No backend calls.

use leptos::*;
use leptos_router::*;

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="space-y-16">
            // Hero section
            <section class="text-center py-16 bg-gradient-to-br from-primary-600 to-cyan-500 rounded-xl">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">
                    "DormSpace - roommate coordination made simple"
                </h1>
                <p class="text-xl opacity-95 mb-8 max-w-2xl mx-auto">
                    "Assign chores, share schedules, and keep your household running smoothly."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-3">
                    <A
                        href="/signup"
                        class="px-6 py-3 bg-white text-gray-900 hover:bg-gray-100 rounded-lg font-semibold transition-colors"
                    >
                        "Get Started"
                    </A>
                    <A
                        href="/login"
                        class="px-6 py-3 border border-white/80 hover:bg-white/10 rounded-lg font-semibold transition-colors"
                    >
                        "Sign In"
                    </A>
                </div>
            </section>

            // Features section
            <section>
                <h2 class="text-3xl font-bold text-center mb-10">"Why choose DormSpace?"</h2>
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    <FeatureCard
                        icon="👥"
                        title="Group Management"
                        description="Create groups and invite your roommates to coordinate together."
                    />
                    <FeatureCard
                        icon="🧹"
                        title="Chore Management"
                        description="Organize and assign chores among group members easily."
                    />
                    <FeatureCard
                        icon="📅"
                        title="Schedule Planning"
                        description="Plan shared schedules and stay on top of deadlines."
                    />
                    <FeatureCard
                        icon="✅"
                        title="Activity Tracking"
                        description="Track completed tasks and monitor group progress."
                    />
                </div>
            </section>

            // Call to action
            <section class="bg-gray-800 rounded-xl py-12 text-center">
                <h2 class="text-2xl font-bold mb-2">"Ready to simplify roommate coordination?"</h2>
                <p class="text-gray-400 mb-6">"Create your group and start organizing today."</p>
                <A
                    href="/signup"
                    class="inline-block px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-semibold transition-colors"
                >
                    "Start Today"
                </A>
            </section>
        </div>
    }
}

/// Single feature card
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 text-center border border-gray-700 hover:border-gray-600
                    hover:-translate-y-1 transition-all">
            <div class="text-5xl mb-3">{icon}</div>
            <h3 class="font-semibold text-lg mb-2">{title}</h3>
            <p class="text-gray-400 text-sm">{description}</p>
        </div>
    }
}
