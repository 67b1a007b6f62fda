use leptos::prelude::*;

#[component]
pub fn TechBadge(
    label: String,
    /// Color classes for the technology's category.
    color: &'static str,
) -> impl IntoView {
    let base = "px-2 py-1 text-xs rounded-full";

    view! {
        <span class=format!("{} {}", base, color)>
            {label}
        </span>
    }
}
