//! Page-level loading of the static home document.

use std::future::Future;
use thiserror::Error;

use crate::models::{HomeData, HomeDocument};

pub const DEFAULT_HOME_DOCUMENT: &str = "/data/home.json";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("Invalid home document: {0}")]
    Malformed(String),
    #[error("No featured projects in response.")]
    MissingFeaturedProjects,
}

/// What the home view renders.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Error(String),
    Ready(HomeData),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&HomeData> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

impl From<Result<HomeData, LoadError>> for LoadState {
    fn from(result: Result<HomeData, LoadError>) -> Self {
        match result {
            Ok(data) => LoadState::Ready(data),
            Err(e) => LoadState::Error(e.to_string()),
        }
    }
}

/// Interpret the raw response for the home document.
pub fn interpret_home_response(status: u16, body: &str) -> Result<HomeData, LoadError> {
    if !(200..300).contains(&status) {
        return Err(LoadError::Http(status));
    }

    let document: HomeDocument =
        serde_json::from_str(body).map_err(|e| LoadError::Malformed(e.to_string()))?;

    let featured_projects = document
        .featured_projects
        .ok_or(LoadError::MissingFeaturedProjects)?;

    Ok(HomeData {
        hero: document.hero,
        featured_projects,
    })
}

/// Where the home document comes from.
pub trait HomeSource {
    fn fetch_home(&self) -> impl Future<Output = Result<HomeData, LoadError>>;
}

/// Fetches the home document over HTTP from an absolute URL.
#[derive(Clone)]
pub struct HttpHomeSource {
    http: reqwest::Client,
    url: String,
}

impl HttpHomeSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl HomeSource for HttpHomeSource {
    async fn fetch_home(&self) -> Result<HomeData, LoadError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        tracing::debug!(url = %self.url, status, "Home data response");

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        interpret_home_response(status, &body)
    }
}

/// Resolve the home document once. Never fails: errors become
/// `LoadState::Error` with a message for the page.
pub async fn load_home<S: HomeSource>(source: &S) -> LoadState {
    match source.fetch_home().await {
        Ok(data) => {
            tracing::debug!(
                projects = data.featured_projects.len(),
                "Received home data"
            );
            LoadState::Ready(data)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching home data");
            LoadState::Error(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    const HOME: &str = r#"{
        "hero": { "name": "Ada", "title": "Engineer", "description": "Builds things." },
        "featuredProjects": [
            { "id": 3, "title": "Gamma", "description": "", "repoUrl": "https://github.com/ada/gamma" },
            { "id": 1, "title": "Alpha", "description": "", "repoUrl": "https://github.com/ada/alpha" },
            { "id": 2, "title": "Beta", "description": "", "repoUrl": "https://github.com/ada/beta" }
        ]
    }"#;

    #[test]
    fn well_formed_document_preserves_order() {
        let data = interpret_home_response(200, HOME).unwrap();
        assert_eq!(data.hero.name, "Ada");
        let titles: Vec<_> = data
            .featured_projects
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, ["Gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn missing_featured_projects() {
        let err = interpret_home_response(200, r#"{ "hero": { "name": "Ada", "title": "", "description": "" } }"#)
            .unwrap_err();
        assert_eq!(err, LoadError::MissingFeaturedProjects);
        assert_eq!(err.to_string(), "No featured projects in response.");
    }

    #[test]
    fn not_found_status() {
        let err = interpret_home_response(404, "Not Found").unwrap_err();
        assert_eq!(err, LoadError::Http(404));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn status_checked_before_body() {
        assert_eq!(
            interpret_home_response(500, HOME),
            Err(LoadError::Http(500))
        );
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            interpret_home_response(200, "<!doctype html>"),
            Err(LoadError::Malformed(_))
        ));
    }

    #[test]
    fn loose_technology_categories_still_load() {
        let body = r#"{
            "featuredProjects": [
                { "id": 1, "title": "Alpha", "description": "", "repoUrl": "https://github.com/ada/alpha",
                  "technologies": [
                    { "id": 1, "technology": "Nix" },
                    { "id": 2, "technology": "Zig", "category": null },
                    { "id": 3, "technology": "Bash", "category": 7 },
                    { "id": 4, "technology": "Rust", "category": "language" }
                  ] }
            ]
        }"#;

        let data = interpret_home_response(200, body).unwrap();
        let classes: Vec<_> = data.featured_projects[0]
            .technologies
            .iter()
            .map(|t| t.category.badge_class())
            .collect();
        assert_eq!(classes[..3], [crate::style::DEFAULT_BADGE_CLASS; 3]);
        assert_eq!(classes[3], Category::Language.badge_class());
    }

    #[test]
    fn empty_list_is_ready() {
        let data = interpret_home_response(200, r#"{ "featuredProjects": [] }"#).unwrap();
        assert!(data.featured_projects.is_empty());
        assert_eq!(data.hero, Default::default());
    }

    #[test]
    fn state_from_result() {
        let state = LoadState::from(interpret_home_response(404, ""));
        assert_eq!(state.error(), Some("HTTP error! status: 404"));
        assert!(!state.is_loading());
        assert!(state.data().is_none());

        let state = LoadState::from(interpret_home_response(200, HOME));
        assert_eq!(state.data().map(|d| d.featured_projects.len()), Some(3));
    }
}
