use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::{home::HomePage, not_found::NotFoundPage, projects::ProjectsPage};
use crate::state::site::SiteProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
        <Meta name="description" content="Projects, experiments and open source work"/>

        <Title text="Portfolio"/>

        <SiteProvider>
            <Router>
                <main class="min-h-screen bg-background text-foreground">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/projects") view=ProjectsPage/>
                    </Routes>
                </main>
            </Router>
        </SiteProvider>
    }
}
