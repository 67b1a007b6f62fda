use folio_core::LoadState;
use leptos::either::Either;
use leptos::prelude::*;

use crate::components::{CardGrid, ErrorMessage, HeroSection, Layout, ProjectCard, SkeletonCard};
use crate::state::home::use_home_state;
use crate::state::site::use_site;

#[component]
pub fn HomePage() -> impl IntoView {
    let site = use_site();
    let state = use_home_state();
    let skeletons = site.skeleton_cards();
    let profile_image = site.profile_image();

    view! {
        <Layout>
            {move || {
                let (hero, projects) = match state.get() {
                    LoadState::Error(message) => {
                        return Either::Left(view! { <ErrorMessage message=message/> });
                    }
                    LoadState::Ready(data) => (data.hero, Some(data.featured_projects)),
                    LoadState::Loading => (Default::default(), None),
                };

                Either::Right(view! {
                    <section>
                        <HeroSection hero=hero profile_image=profile_image.clone()/>

                        <div class="pt-12 md:pt-20">
                            <div class="flex items-center justify-between mb-8">
                                <h2 class="text-2xl md:text-3xl font-bold">"Featured Projects"</h2>
                                <a
                                    href="/projects"
                                    class="text-primary hover:underline flex items-center text-sm font-medium"
                                >
                                    "View all"
                                    <i class="fas fa-chevron-right ml-1 text-xs"></i>
                                </a>
                            </div>

                            <CardGrid>
                                {match projects {
                                    None => Either::Left(
                                        (0..skeletons).map(|_| view! { <SkeletonCard/> }).collect_view(),
                                    ),
                                    Some(projects) => Either::Right(
                                        projects
                                            .into_iter()
                                            .map(|project| view! { <ProjectCard project=project featured=true/> })
                                            .collect_view(),
                                    ),
                                }}
                            </CardGrid>
                        </div>
                    </section>
                })
            }}
        </Layout>
    }
}
