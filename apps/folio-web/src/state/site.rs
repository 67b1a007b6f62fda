use folio_core::{GitHubClient, HttpHomeSource, SiteConfig};
use leptos::prelude::*;

use crate::services::config::{get_origin, load_site_config};

/// Site-wide configuration shared by every page and card.
#[derive(Clone, Copy)]
pub struct SiteContext {
    config: StoredValue<SiteConfig>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    pub fn skeleton_cards(&self) -> usize {
        self.config.with_value(|c| c.skeleton_cards)
    }

    pub fn profile_image(&self) -> String {
        self.config.with_value(|c| c.profile_image.clone())
    }

    pub fn github(&self) -> GitHubClient {
        self.config.with_value(|c| GitHubClient::new(&c.api_base))
    }

    pub fn home_source(&self) -> HttpHomeSource {
        self.config
            .with_value(|c| HttpHomeSource::new(c.home_document_url(&get_origin())))
    }
}

/// Provide site context to the component tree
#[component]
pub fn SiteProvider(children: Children) -> impl IntoView {
    provide_context(SiteContext::new(load_site_config()));
    children()
}

/// Get site context from anywhere in the component tree
pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}
