use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    let link = "text-sm font-medium text-gray-600 dark:text-gray-400 hover:text-primary transition-colors";

    view! {
        <header class="border-b border-gray-200 dark:border-gray-800">
            <nav class="max-w-6xl mx-auto flex items-center justify-between px-6 py-4">
                <A href="/" attr:class="text-lg font-semibold">
                    "Portfolio"
                </A>
                <div class="flex items-center gap-6">
                    <A href="/" attr:class=link>"Home"</A>
                    <A href="/projects" attr:class=link>"Projects"</A>
                </div>
            </nav>
        </header>
    }
}
