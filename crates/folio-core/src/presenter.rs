//! Card-level enrichment and the view model shared by both card layouts.

use chrono::{DateTime, Utc};

use crate::config::CommitHistoryPolicy;
use crate::github::RepoApi;
use crate::models::{Project, RepoStats};
use crate::recency::recency_label;
use crate::repo::RepoRef;

/// Outbound repository links open in a new browsing context without a
/// reference back to this page.
pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardLayout {
    /// Image-forward card for the landing page.
    Featured,
    /// Text-forward card for the project list.
    #[default]
    Compact,
}

impl CardLayout {
    pub fn from_featured(featured: bool) -> Self {
        if featured {
            CardLayout::Featured
        } else {
            CardLayout::Compact
        }
    }

    pub fn is_featured(&self) -> bool {
        matches!(self, CardLayout::Featured)
    }
}

/// Last-update time of a card's repository.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Recency {
    /// Nothing fetched (yet, or ever). Reads as "now".
    #[default]
    Unresolved,
    Resolved(DateTime<Utc>),
}

impl Recency {
    pub fn updated_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Recency::Unresolved => now,
            Recency::Resolved(at) => *at,
        }
    }

    pub fn label(&self, now: DateTime<Utc>) -> String {
        recency_label(self.updated_at(now), now)
    }
}

/// Star/fork counts for the project's repository, `{0, 0}` on any failure.
pub async fn resolve_stats<A: RepoApi>(api: &A, project: &Project) -> RepoStats {
    let repo = match RepoRef::parse(&project.repo_url) {
        Ok(repo) => repo,
        Err(e) => {
            tracing::warn!(project = project.id, error = %e, "Error fetching repo stats");
            return RepoStats::default();
        }
    };

    match api.fetch_stats(&repo).await {
        Ok(stats) => {
            tracing::debug!(repo = %repo, stars = stats.stars, forks = stats.forks, "Repo stats");
            stats
        }
        Err(e) => {
            tracing::warn!(repo = %repo, error = %e, "Error fetching repo stats");
            RepoStats::default()
        }
    }
}

/// Last commit date for projects whose repository the policy tracks.
/// Anything else, including failures, stays `Unresolved`.
pub async fn resolve_recency<A: RepoApi>(
    api: &A,
    project: &Project,
    policy: &CommitHistoryPolicy,
) -> Recency {
    let Ok(repo) = RepoRef::parse(&project.repo_url) else {
        return Recency::Unresolved;
    };
    if !policy.tracks(&repo) {
        return Recency::Unresolved;
    }

    match api.fetch_last_commit(&repo).await {
        Ok(date) => Recency::Resolved(date),
        Err(e) => {
            tracing::warn!(repo = %repo, error = %e, "Error fetching commit date");
            Recency::Unresolved
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeView {
    pub label: String,
    pub class: &'static str,
}

/// The parts of a card that change as repository metadata arrives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardStatus {
    pub stars: u64,
    pub forks: u64,
    pub recency: String,
}

impl CardStatus {
    pub fn new(stats: RepoStats, recency: Recency, now: DateTime<Utc>) -> Self {
        Self {
            stars: stats.stars,
            forks: stats.forks,
            recency: recency.label(now),
        }
    }
}

/// Everything a card renders, independent of layout.
///
/// Everything but `status` is fixed once the project is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub layout: CardLayout,
    pub title: String,
    pub description: String,
    /// Only shown by the featured layout.
    pub image_url: Option<String>,
    pub repo_url: String,
    pub badges: Vec<BadgeView>,
    pub status: CardStatus,
}

impl CardView {
    pub fn build(
        project: &Project,
        layout: CardLayout,
        stats: RepoStats,
        recency: Recency,
        now: DateTime<Utc>,
    ) -> Self {
        let badges = project
            .technologies
            .iter()
            .map(|tech| BadgeView {
                label: tech.technology.clone(),
                class: tech.category.badge_class(),
            })
            .collect();

        Self {
            layout,
            title: project.title.clone(),
            description: project.description.clone(),
            image_url: project.image().map(str::to_string),
            repo_url: project.repo_url.clone(),
            badges,
            status: CardStatus::new(stats, recency, now),
        }
    }

    pub fn show_image(&self) -> bool {
        self.layout.is_featured() && self.image_url.is_some()
    }
}
