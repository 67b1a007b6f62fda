//! Configuration utilities for the web app

use folio_core::SiteConfig;

const SITE_CONFIG: &str = include_str!("../../site.json");

/// Site configuration embedded at build time. Falls back to the defaults when
/// `site.json` does not parse, so a bad edit never blanks the page.
pub fn load_site_config() -> SiteConfig {
    parse_site_config(SITE_CONFIG)
}

fn parse_site_config(contents: &str) -> SiteConfig {
    match SiteConfig::from_json(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid site.json, using defaults");
            SiteConfig::default()
        }
    }
}

/// Origin the app is served from, used to resolve relative document paths.
#[cfg(target_arch = "wasm32")]
pub fn get_origin() -> String {
    use web_sys::window;

    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_origin() -> String {
    "http://localhost:3000".to_string()
}
