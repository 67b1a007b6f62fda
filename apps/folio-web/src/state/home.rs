use folio_core::LoadState;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use leptos::task::spawn_local;

use crate::state::site::use_site;

/// Load the home document once for the calling page. Starts `Loading` and
/// settles on `Ready` or `Error`; a page torn down mid-request never sees the
/// response.
pub fn use_home_state() -> ReadSignal<LoadState> {
    let site = use_site();
    let (state, set_state) = signal(LoadState::Loading);

    #[cfg(target_arch = "wasm32")]
    {
        use folio_core::{load_home, TaskScope};

        let source = site.home_source();
        let scope = StoredValue::new_local(TaskScope::new());
        let task = scope.with_value(|scope| {
            scope.guard(async move {
                set_state.set(load_home(&source).await);
            })
        });
        spawn_local(task);
        on_cleanup(move || {
            scope.try_with_value(TaskScope::dispose);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (site, set_state);
    }

    state
}
