//! Repository metadata from the GitHub REST API.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::future::Future;
use thiserror::Error;

use crate::models::RepoStats;
use crate::repo::RepoRef;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Source of live repository metadata.
///
/// No `Send` bound: in the browser every future runs on the single UI thread.
pub trait RepoApi {
    /// Star and fork counts for a repository.
    fn fetch_stats(
        &self,
        repo: &RepoRef,
    ) -> impl Future<Output = Result<RepoStats, FetchError>>;

    /// Committer timestamp of the most recent commit on the default branch.
    fn fetch_last_commit(
        &self,
        repo: &RepoRef,
    ) -> impl Future<Output = Result<DateTime<Utc>, FetchError>>;
}

#[derive(Deserialize)]
struct RepoResponse {
    stargazers_count: u64,
    forks_count: u64,
}

#[derive(Deserialize)]
struct CommitEntry {
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    committer: Signature,
}

#[derive(Deserialize)]
struct Signature {
    date: DateTime<Utc>,
}

fn ensure_success(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Http { status })
    }
}

/// Interpret a `GET /repos/{owner}/{repo}` response.
pub fn parse_repo_stats(status: u16, body: &str) -> Result<RepoStats, FetchError> {
    ensure_success(status)?;
    let repo: RepoResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    Ok(RepoStats {
        stars: repo.stargazers_count,
        forks: repo.forks_count,
    })
}

/// Interpret a `GET /repos/{owner}/{repo}/commits` response. The API lists
/// newest first, so the first entry wins.
pub fn parse_last_commit(status: u16, body: &str) -> Result<DateTime<Utc>, FetchError> {
    ensure_success(status)?;
    let commits: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    // Only the newest entry is read.
    let newest = commits
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Malformed("commit list is empty".to_string()))?;
    let entry: CommitEntry =
        serde_json::from_value(newest).map_err(|e| FetchError::Malformed(e.to_string()))?;
    Ok(entry.commit.committer.date)
}

/// `RepoApi` over HTTP.
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new(api_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn get(&self, url: &str) -> Result<(u16, String), FetchError> {
        tracing::debug!(url, "GitHub request");

        let request = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT_GITHUB_JSON);

        // Browsers set their own user agent and refuse overrides.
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.header(
            reqwest::header::USER_AGENT,
            concat!("folio/", env!("CARGO_PKG_VERSION")),
        );

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok((status, body))
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl RepoApi for GitHubClient {
    async fn fetch_stats(&self, repo: &RepoRef) -> Result<RepoStats, FetchError> {
        let (status, body) = self.get(&repo.api_url(&self.api_base)).await?;
        parse_repo_stats(status, &body)
    }

    async fn fetch_last_commit(&self, repo: &RepoRef) -> Result<DateTime<Utc>, FetchError> {
        let (status, body) = self.get(&repo.commits_url(&self.api_base)).await?;
        parse_last_commit(status, &body)
    }
}
