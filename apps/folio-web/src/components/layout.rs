use leptos::prelude::*;

use super::Navbar;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col">
            <Navbar/>
            <div class="flex-1 w-full max-w-6xl mx-auto px-6 py-12">
                {children()}
            </div>
        </div>
    }
}
