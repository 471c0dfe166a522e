use crate::error::RepoSearchError;
use serde::{Deserialize, Deserializer};
use url::Url;

// GitHub API response structures
#[derive(Debug, Deserialize)]
struct RawOwner {
    avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRepository {
    id: u64,
    name: String,
    full_name: String,
    html_url: String,
    description: Option<String>,
    stargazers_count: u64,
    language: Option<String>,
    owner: Option<RawOwner>,
}

/// One repository entry from `GET /users/{user}/repos`.
///
/// Records are only built through validation: `name` is non-empty and
/// `html_url` is an absolute URL. A payload entry that fails either check
/// fails the whole decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    id: u64,
    name: String,
    full_name: String,
    html_url: String,
    description: Option<String>,
    stars: u64,
    language: Option<String>,
    owner_avatar_url: Option<String>,
}

impl RepositoryRecord {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        full_name: impl Into<String>,
        html_url: impl Into<String>,
        description: Option<String>,
        stars: u64,
    ) -> Result<Self, RepoSearchError> {
        Self::validated(RawRepository {
            id,
            name: name.into(),
            full_name: full_name.into(),
            html_url: html_url.into(),
            description,
            stargazers_count: stars,
            language: None,
            owner: None,
        })
    }

    fn validated(raw: RawRepository) -> Result<Self, RepoSearchError> {
        if raw.name.trim().is_empty() {
            return Err(RepoSearchError::InvalidRecord(format!(
                "repository {} has an empty name",
                raw.id
            )));
        }
        if raw.html_url.is_empty() {
            return Err(RepoSearchError::InvalidRecord(format!(
                "repository {} has an empty html_url",
                raw.name
            )));
        }
        Url::parse(&raw.html_url).map_err(|e| {
            RepoSearchError::InvalidRecord(format!(
                "repository {} has a malformed html_url {:?}: {}",
                raw.name, raw.html_url, e
            ))
        })?;

        Ok(RepositoryRecord {
            id: raw.id,
            name: raw.name,
            full_name: raw.full_name,
            html_url: raw.html_url,
            description: raw.description,
            stars: raw.stargazers_count,
            language: raw.language,
            owner_avatar_url: raw.owner.and_then(|o| o.avatar_url),
        })
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn html_url(&self) -> &str {
        &self.html_url
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn stars(&self) -> u64 {
        self.stars
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn owner_avatar_url(&self) -> Option<&str> {
        self.owner_avatar_url.as_deref()
    }
}

impl<'de> Deserialize<'de> for RepositoryRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawRepository::deserialize(deserializer)?;
        Self::validated(raw).map_err(serde::de::Error::custom)
    }
}
