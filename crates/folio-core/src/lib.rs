//! Core logic for the portfolio site.
//!
//! Everything here is platform independent so it can be unit tested natively
//! and compiled to `wasm32` for the web app:
//! - `models`: the static home document and project records
//! - `repo`: GitHub repository URL parsing
//! - `recency` / `style`: pure presentation helpers
//! - `github`: repository metadata client
//! - `loader`: page-level home document loading
//! - `presenter`: card-level enrichment and the shared card view model
//! - `scope`: cancellation of in-flight card fetches

pub mod config;
pub mod github;
pub mod loader;
pub mod models;
pub mod presenter;
pub mod recency;
pub mod repo;
pub mod scope;
pub mod style;

pub use config::{CommitHistoryPolicy, ConfigError, SiteConfig};
pub use github::{FetchError, GitHubClient, RepoApi};
pub use loader::{load_home, HomeSource, HttpHomeSource, LoadError, LoadState};
pub use models::{Category, Hero, HomeData, HomeDocument, Project, RepoStats, Technology};
pub use presenter::{resolve_recency, resolve_stats, CardLayout, CardStatus, CardView, Recency};
pub use repo::{RepoRef, RepoUrlError};
pub use scope::TaskScope;
