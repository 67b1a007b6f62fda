use folio_core::Hero;
use leptos::prelude::*;

use super::LinkButton;

#[component]
pub fn HeroSection(hero: Hero, profile_image: String) -> impl IntoView {
    let alt = hero.name.clone();

    view! {
        <div class="flex flex-col md:flex-row gap-8 md:gap-12 pb-12 md:pb-20 border-b border-gray-200 dark:border-gray-800">
            <div class="flex-1 flex flex-col justify-center">
                <h1 class="text-4xl md:text-5xl font-bold tracking-tight mb-4">
                    <span class="block">"Hi, I'm "{hero.name}</span>
                    <span class="text-primary block mt-2 text-2xl md:text-3xl">{hero.title}</span>
                </h1>
                <p class="text-lg text-gray-600 dark:text-gray-400 mb-8 leading-relaxed">
                    {hero.description}
                </p>
                <div class="flex flex-wrap gap-3">
                    <LinkButton href="/projects">
                        "View Projects"
                        <i class="fas fa-arrow-right ml-2"></i>
                    </LinkButton>
                </div>
            </div>
            <div class="flex-1 max-w-xs mx-auto md:max-w-sm">
                <div class="relative w-3/4 mx-auto">
                    <div class="absolute -inset-1 bg-gradient-to-r from-primary to-purple-600 rounded-lg blur opacity-30"></div>
                    <div class="relative aspect-square overflow-hidden rounded-lg bg-card border border-gray-200 dark:border-gray-800 shadow-md">
                        <img src=profile_image alt=alt class="object-cover w-full h-full"/>
                    </div>
                </div>
            </div>
        </div>
    }
}
