use chrono::Utc;
use folio_core::presenter::{BadgeView, LINK_REL, LINK_TARGET};
use folio_core::{CardLayout, CardStatus, CardView, Project};
use leptos::either::Either;
use leptos::prelude::*;

use super::card::CARD_SHELL;
use super::TechBadge;
use crate::state::repo::use_repo_metadata;

/// One project, with live stars/forks and a last-updated label.
///
/// `featured` selects the large image-forward layout; otherwise the compact
/// text-forward one. Both render from the same `CardView`. The markup is built
/// once; only the `CardStatus` parts re-render as metadata arrives.
#[component]
pub fn ProjectCard(project: Project, #[prop(optional)] featured: bool) -> impl IntoView {
    let layout = CardLayout::from_featured(featured);
    let metadata = use_repo_metadata(&project);

    let card = CardView::build(
        &project,
        layout,
        metadata.stats.get_untracked(),
        metadata.recency.get_untracked(),
        Utc::now(),
    );
    let status = Memo::new(move |_| {
        CardStatus::new(metadata.stats.get(), metadata.recency.get(), Utc::now())
    });

    render_card(card, status)
}

fn render_card(card: CardView, status: Memo<CardStatus>) -> impl IntoView {
    let featured = card.layout.is_featured();
    let image = card
        .show_image()
        .then(|| card.image_url.clone())
        .flatten()
        .map(|src| {
            let alt = card.title.clone();
            view! {
                <img
                    src=src
                    alt=alt
                    class="w-full h-full object-cover transition-transform duration-300 group-hover:scale-105"
                />
            }
        });

    let header = if featured {
        Either::Left(view! {
            <div class="flex items-center justify-between mb-2">
                <h3 class="font-semibold text-lg group-hover:text-primary transition-colors">
                    {card.title.clone()}
                </h3>
                <Stats status=status class="gap-2 text-sm"/>
            </div>
        })
    } else {
        Either::Right(view! {
            <div class="flex items-center justify-between mb-3">
                <h3 class="font-semibold text-xl group-hover:text-primary transition-colors">
                    {card.title.clone()}
                </h3>
                <a
                    href=card.repo_url.clone()
                    target=LINK_TARGET
                    rel=LINK_REL
                    class="text-gray-500 dark:text-gray-400 hover:text-primary transition-colors"
                >
                    <i class="fab fa-github text-lg"></i>
                </a>
            </div>
        })
    };

    let footer = if featured {
        Either::Left(view! {
            <div class="flex justify-between items-center">
                <span class="text-xs text-gray-500 dark:text-gray-400">{move || status.with(|s| s.recency.clone())}</span>
                <a
                    href=card.repo_url.clone()
                    target=LINK_TARGET
                    rel=LINK_REL
                    class="text-primary hover:text-primary/80 transition-colors"
                >
                    <i class="fab fa-github mr-1"></i>
                    " View Repo"
                </a>
            </div>
        })
    } else {
        Either::Right(view! {
            <div class="flex flex-wrap items-center justify-between text-sm">
                <Stats status=status class="gap-3"/>
                <span class="text-xs text-gray-500 dark:text-gray-400">{move || status.with(|s| s.recency.clone())}</span>
            </div>
        })
    };

    let description_class = if featured {
        "text-gray-600 dark:text-gray-400 text-sm mb-4"
    } else {
        "text-gray-600 dark:text-gray-400 mb-4"
    };

    view! {
        <div class=CARD_SHELL>
            {featured.then(|| view! {
                <div class="aspect-video overflow-hidden bg-gray-100 dark:bg-gray-800">
                    {image}
                </div>
            })}
            <div class="p-5">
                {header}
                <p class=description_class>{card.description.clone()}</p>
                <Badges badges=card.badges.clone()/>
                {footer}
            </div>
        </div>
    }
}

#[component]
fn Stats(status: Memo<CardStatus>, class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("flex items-center text-gray-500 dark:text-gray-400 {}", class)>
            <span class="flex items-center"><i class="fas fa-star mr-1"></i>" "{move || status.with(|s| s.stars)}</span>
            <span class="flex items-center"><i class="fas fa-code-branch mr-1"></i>" "{move || status.with(|s| s.forks)}</span>
        </div>
    }
}

#[component]
fn Badges(badges: Vec<BadgeView>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 mb-4">
            {badges
                .into_iter()
                .map(|badge| view! { <TechBadge label=badge.label color=badge.class/> })
                .collect_view()}
        </div>
    }
}
