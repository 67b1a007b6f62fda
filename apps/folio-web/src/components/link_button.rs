use leptos::prelude::*;

#[component]
pub fn LinkButton(href: &'static str, children: Children) -> impl IntoView {
    view! {
        <a
            href=href
            class="inline-flex items-center justify-center gap-2 px-4 py-2 text-sm font-medium rounded-md transition-colors focus:outline-none focus-visible:ring-2 focus-visible:ring-primary/50 bg-primary text-white hover:bg-primary/90"
        >
            {children()}
        </a>
    }
}
