use folio_core::LoadState;
use leptos::prelude::*;

use crate::components::{CardGrid, ErrorMessage, Layout, ProjectCard, SkeletonCard};
use crate::state::home::use_home_state;
use crate::state::site::use_site;

/// Every project from the home document, in the compact layout.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let site = use_site();
    let state = use_home_state();
    let skeletons = site.skeleton_cards();

    view! {
        <Layout>
            <div class="space-y-8">
                <h1 class="text-3xl md:text-4xl font-bold">"Projects"</h1>

                {move || match state.get() {
                    LoadState::Loading => view! {
                        <CardGrid>
                            {(0..skeletons).map(|_| view! { <SkeletonCard/> }).collect_view()}
                        </CardGrid>
                    }
                    .into_any(),
                    LoadState::Error(message) => view! { <ErrorMessage message=message/> }.into_any(),
                    LoadState::Ready(data) if data.featured_projects.is_empty() => view! {
                        <p class="text-gray-600 dark:text-gray-400">"No projects yet."</p>
                    }
                    .into_any(),
                    LoadState::Ready(data) => view! {
                        <CardGrid>
                            {data
                                .featured_projects
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project/> })
                                .collect_view()}
                        </CardGrid>
                    }
                    .into_any(),
                }}
            </div>
        </Layout>
    }
}
