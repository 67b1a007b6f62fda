//! GitHub repository identification.
//!
//! Both card fetches derive their endpoints from `RepoRef::parse`, so a
//! malformed `repoUrl` fails the same way for stats and commit history.

use std::fmt;
use thiserror::Error;
use url::Url;

const GITHUB_HOSTS: [&str; 2] = ["github.com", "www.github.com"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoUrlError {
    #[error("Invalid repository URL '{0}'")]
    InvalidUrl(String),
    #[error("Not a GitHub repository URL: {0}")]
    NotGitHub(String),
    #[error("Repository URL is missing the owner: {0}")]
    MissingOwner(String),
    #[error("Repository URL is missing the repository name: {0}")]
    MissingName(String),
}

/// An `owner/name` pair identifying a GitHub repository.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Extract the repository from a `https://github.com/{owner}/{repo}` URL.
    ///
    /// Anything after the repository segment (`/tree/main`, query, fragment)
    /// is ignored and a trailing `.git` is stripped.
    pub fn parse(repo_url: &str) -> Result<Self, RepoUrlError> {
        let url = Url::parse(repo_url.trim())
            .map_err(|_| RepoUrlError::InvalidUrl(repo_url.to_string()))?;

        let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
        if !GITHUB_HOSTS.contains(&host.as_str()) {
            return Err(RepoUrlError::NotGitHub(repo_url.to_string()));
        }

        let mut segments = url
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty());

        let owner = segments
            .next()
            .ok_or_else(|| RepoUrlError::MissingOwner(repo_url.to_string()))?;
        let name = segments
            .next()
            .map(|s| s.strip_suffix(".git").unwrap_or(s))
            .filter(|s| !s.is_empty())
            .ok_or_else(|| RepoUrlError::MissingName(repo_url.to_string()))?;

        Ok(Self::new(owner, name))
    }

    /// `owner/name`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// GitHub slugs are case-insensitive.
    pub fn matches_slug(&self, slug: &str) -> bool {
        self.slug().eq_ignore_ascii_case(slug.trim().trim_matches('/'))
    }

    pub fn api_url(&self, api_base: &str) -> String {
        format!(
            "{}/repos/{}/{}",
            api_base.trim_end_matches('/'),
            self.owner,
            self.name
        )
    }

    pub fn commits_url(&self, api_base: &str) -> String {
        format!("{}/commits", self.api_url(api_base))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const API: &str = "https://api.github.com";

    #[test]
    fn derives_stats_endpoint() {
        let repo = RepoRef::parse("https://github.com/acme/widget").unwrap();
        assert_eq!(repo, RepoRef::new("acme", "widget"));
        assert_eq!(repo.api_url(API), "https://api.github.com/repos/acme/widget");
        assert_eq!(
            repo.commits_url(API),
            "https://api.github.com/repos/acme/widget/commits"
        );
    }

    #[test]
    fn tolerates_common_url_variations() {
        for url in [
            "https://github.com/acme/widget/",
            "https://github.com/acme/widget.git",
            "https://www.github.com/acme/widget",
            "https://GitHub.com/acme/widget?tab=readme",
            "https://github.com/acme/widget/tree/main/src#readme",
            "  https://github.com/acme/widget  ",
        ] {
            assert_eq!(
                RepoRef::parse(url).unwrap(),
                RepoRef::new("acme", "widget"),
                "{url}"
            );
        }
    }

    #[test]
    fn rejects_malformed_urls() {
        assert!(matches!(
            RepoRef::parse("not a url"),
            Err(RepoUrlError::InvalidUrl(_))
        ));
        assert!(matches!(
            RepoRef::parse(""),
            Err(RepoUrlError::InvalidUrl(_))
        ));
        assert!(matches!(
            RepoRef::parse("https://gitlab.com/acme/widget"),
            Err(RepoUrlError::NotGitHub(_))
        ));
        assert!(matches!(
            RepoRef::parse("https://github.com/"),
            Err(RepoUrlError::MissingOwner(_))
        ));
        assert!(matches!(
            RepoRef::parse("https://github.com/acme"),
            Err(RepoUrlError::MissingName(_))
        ));
        assert!(matches!(
            RepoRef::parse("https://github.com/acme/.git"),
            Err(RepoUrlError::MissingName(_))
        ));
    }

    #[test]
    fn slug_matching_ignores_case() {
        let repo = RepoRef::new("Acme", "Widget");
        assert_eq!(repo.slug(), "Acme/Widget");
        assert!(repo.matches_slug("acme/widget"));
        assert!(repo.matches_slug("/acme/widget/"));
        assert!(!repo.matches_slug("acme/gadget"));
    }

    #[test]
    fn api_base_trailing_slash() {
        let repo = RepoRef::new("acme", "widget");
        assert_eq!(
            repo.api_url("http://localhost:9000/"),
            "http://localhost:9000/repos/acme/widget"
        );
    }
}
