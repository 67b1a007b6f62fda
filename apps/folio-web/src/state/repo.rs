use folio_core::{Project, Recency, RepoStats};
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use leptos::task::spawn_local;

/// Live metadata for one card. Both values start at their defaults and are
/// filled in independently as the requests resolve.
#[derive(Clone, Copy)]
pub struct RepoMetadata {
    pub stats: ReadSignal<RepoStats>,
    pub recency: ReadSignal<Recency>,
}

/// Start the stats and commit-date fetches for `project`. Both are cancelled
/// when the calling component is cleaned up.
pub fn use_repo_metadata(project: &Project) -> RepoMetadata {
    let (stats, set_stats) = signal(RepoStats::default());
    let (recency, set_recency) = signal(Recency::Unresolved);

    #[cfg(target_arch = "wasm32")]
    {
        use crate::state::site::use_site;
        use folio_core::{resolve_recency, resolve_stats, TaskScope};

        let site = use_site();
        let scope = StoredValue::new_local(TaskScope::new());

        scope.with_value(|scope| {
            let github = site.github();
            let for_stats = project.clone();
            spawn_local(scope.guard(async move {
                set_stats.set(resolve_stats(&github, &for_stats).await);
            }));

            let github = site.github();
            let for_recency = project.clone();
            let policy = site.config().commit_history;
            spawn_local(scope.guard(async move {
                set_recency.set(resolve_recency(&github, &for_recency, &policy).await);
            }));
        });

        on_cleanup(move || {
            scope.try_with_value(TaskScope::dispose);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (project, set_stats, set_recency);
    }

    RepoMetadata { stats, recency }
}
