//! Site configuration.
//!
//! The web app embeds a `site.json` at build time:
//!
//! ```json
//! {
//!   "home_document": "/data/home.json",
//!   "api_base": "https://api.github.com",
//!   "skeleton_cards": 3,
//!   "profile_image": "/images/profile.png",
//!   "commit_history": ["owner/repo"]
//! }
//! ```
//!
//! Every field is optional and falls back to the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::github::DEFAULT_API_BASE;
use crate::loader::DEFAULT_HOME_DOCUMENT;
use crate::repo::RepoRef;

/// The site's own repository, the only one whose commit history is read by
/// default.
pub const SITE_REPOSITORY: &str = "superbrucem/git-Projects-MainSite";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid tracked repository '{0}', expected owner/repo")]
    InvalidRepository(String),
}

/// Repositories whose last commit date is fetched for the recency label.
/// Projects outside the list keep the default label.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct CommitHistoryPolicy {
    tracked: Vec<String>,
}

impl CommitHistoryPolicy {
    pub fn tracking<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tracked: slugs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn none() -> Self {
        Self { tracked: vec![] }
    }

    pub fn tracks(&self, repo: &RepoRef) -> bool {
        self.tracked.iter().any(|slug| repo.matches_slug(slug))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for slug in &self.tracked {
            let mut parts = slug.trim().trim_matches('/').split('/');
            let valid = matches!(
                (parts.next(), parts.next(), parts.next()),
                (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
            );
            if !valid {
                return Err(ConfigError::InvalidRepository(slug.clone()));
            }
        }
        Ok(())
    }
}

impl Default for CommitHistoryPolicy {
    fn default() -> Self {
        Self::tracking([SITE_REPOSITORY])
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Path or absolute URL of the home document.
    pub home_document: String,
    /// GitHub REST API base URL.
    pub api_base: String,
    /// Placeholder cards shown while the home document loads.
    pub skeleton_cards: usize,
    pub profile_image: String,
    pub commit_history: CommitHistoryPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_document: DEFAULT_HOME_DOCUMENT.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            skeleton_cards: 3,
            profile_image: "/images/profile.png".to_string(),
            commit_history: CommitHistoryPolicy::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(contents)?;
        config.commit_history.validate()?;
        Ok(config)
    }

    /// Absolute URL of the home document. Relative paths resolve against
    /// `origin`.
    pub fn home_document_url(&self, origin: &str) -> String {
        if self.home_document.starts_with("http://") || self.home_document.starts_with("https://")
        {
            self.home_document.clone()
        } else {
            format!(
                "{}/{}",
                origin.trim_end_matches('/'),
                self.home_document.trim_start_matches('/')
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.home_document, "/data/home.json");
        assert_eq!(config.api_base, "https://api.github.com");
        assert_eq!(config.skeleton_cards, 3);
        assert!(config
            .commit_history
            .tracks(&RepoRef::new("superbrucem", "git-Projects-MainSite")));
        assert!(!config.commit_history.tracks(&RepoRef::new("acme", "widget")));
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = SiteConfig::from_json(
            r#"{ "skeleton_cards": 6, "commit_history": ["acme/widget", "acme/gadget"] }"#,
        )
        .unwrap();
        assert_eq!(config.skeleton_cards, 6);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert!(config.commit_history.tracks(&RepoRef::new("ACME", "Gadget")));
        assert!(!config
            .commit_history
            .tracks(&RepoRef::new("superbrucem", "git-Projects-MainSite")));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            SiteConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "commit_history": ["just-a-name"] }"#),
            Err(ConfigError::InvalidRepository(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "commit_history": ["a/b/c"] }"#),
            Err(ConfigError::InvalidRepository(_))
        ));
    }

    #[test]
    fn resolves_home_document_url() {
        let config = SiteConfig::default();
        assert_eq!(
            config.home_document_url("https://example.dev/"),
            "https://example.dev/data/home.json"
        );

        let config = SiteConfig {
            home_document: "https://cdn.example.dev/home.json".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(
            config.home_document_url("https://example.dev"),
            "https://cdn.example.dev/home.json"
        );
    }

    #[test]
    fn empty_policy_tracks_nothing() {
        assert!(!CommitHistoryPolicy::none().tracks(&RepoRef::new("a", "b")));
    }
}
