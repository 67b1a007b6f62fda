use leptos::prelude::*;

pub const CARD_SHELL: &str = "group rounded-lg border border-gray-200 dark:border-gray-800 bg-card overflow-hidden hover:shadow-md transition-all duration-200";

#[component]
pub fn CardGrid(children: Children) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {children()}
        </div>
    }
}

/// Placeholder shown while projects load.
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 dark:border-gray-800 bg-card h-96 animate-pulse"></div>
    }
}
