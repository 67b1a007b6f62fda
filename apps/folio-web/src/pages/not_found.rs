use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::Layout;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="flex items-center justify-center py-24">
                <div class="text-center">
                    <p class="text-9xl font-bold text-gray-300 dark:text-gray-700">"404"</p>
                    <h1 class="text-2xl font-bold mt-4">"Page not found"</h1>
                    <p class="text-gray-600 dark:text-gray-400 mt-2">
                        "The page you're looking for doesn't exist."
                    </p>
                    <A
                        href="/"
                        attr:class="inline-flex items-center justify-center gap-2 px-4 py-2 mt-6 text-sm font-medium rounded-md bg-primary text-white hover:bg-primary/90 transition-colors"
                    >
                        "Go home"
                    </A>
                </div>
            </div>
        </Layout>
    }
}
