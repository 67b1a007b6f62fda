use leptos::prelude::*;

/// Inline error block for a page whose data failed to load.
#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="text-center py-8" role="alert">
            <p class="text-red-500">"Error: "{message}</p>
        </div>
    }
}
