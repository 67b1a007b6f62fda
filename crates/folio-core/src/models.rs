use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Presentation category of a technology badge.
///
/// Unknown, missing or non-string values from the data file deserialize to
/// `Other` so a new category never breaks loading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Database,
    Language,
    Mobile,
    State,
    Styling,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Frontend,
        Category::Backend,
        Category::Database,
        Category::Language,
        Category::Mobile,
        Category::State,
        Category::Styling,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Database => "database",
            Category::Language => "language",
            Category::Mobile => "mobile",
            Category::State => "state",
            Category::Styling => "styling",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .unwrap_or(Category::Other))
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw.as_ref().and_then(serde_json::Value::as_str) {
            Some(name) => name.parse().unwrap_or_default(),
            None => Category::Other,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub id: i64,
    pub technology: String,
    #[serde(default)]
    pub category: Category,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub repo_url: String,
    #[serde(default)]
    pub technologies: Vec<Technology>,
}

impl Project {
    /// Image to show in the featured layout, if the record carries a usable one.
    pub fn image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub description: String,
}

/// `/data/home.json` as served.
///
/// `featured_projects` stays optional here so the loader can tell a missing
/// field apart from an empty list.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeDocument {
    #[serde(default)]
    pub hero: Hero,
    #[serde(default)]
    pub featured_projects: Option<Vec<Project>>,
}

/// A validated home document, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeData {
    pub hero: Hero,
    pub featured_projects: Vec<Project>,
}

/// Live star/fork counts for one repository.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepoStats {
    pub stars: u64,
    pub forks: u64,
}
