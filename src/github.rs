use crate::error::{FetchError, RepoSearchError, Result};
use crate::types::RepositoryRecord;
use reqwest::Client;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "github-repo-search/0.1.0";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Outcome of a fetch started with [`GitHubClient::spawn_fetch`].
#[derive(Debug)]
pub struct FetchCompletion {
    pub username: String,
    pub result: std::result::Result<Vec<RepositoryRecord>, FetchError>,
}

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            RepoSearchError::Config(format!("Invalid API base URL {}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(RepoSearchError::Config(format!(
                "API base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::from)?;

        Ok(GitHubClient { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/users/{username}/repos`, with the username percent-encoded as a
    /// single path segment. An empty username is passed through unchanged.
    pub fn repos_url(&self, username: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["users", username, "repos"]);
        }
        url
    }

    /// Issue one GET for the user's repositories. No retry is attempted.
    pub async fn fetch_repositories(
        &self,
        username: &str,
    ) -> std::result::Result<Vec<RepositoryRecord>, FetchError> {
        let url = self.repos_url(username);
        debug!(%url, "Fetching repositories");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(username, status = status.as_u16(), "Repository request rejected");
            return Err(FetchError::HttpStatus {
                code: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let repos: Vec<RepositoryRecord> = serde_json::from_slice(&body)?;

        info!(username, count = repos.len(), "Fetched repositories");
        Ok(repos)
    }

    /// Run [`fetch_repositories`](Self::fetch_repositories) on the runtime and
    /// deliver its outcome once through the returned receiver.
    ///
    /// Concurrent fetches are independent; nothing cancels an earlier one.
    pub fn spawn_fetch(&self, username: impl Into<String>) -> oneshot::Receiver<FetchCompletion> {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();
        let username = username.into();

        tokio::spawn(async move {
            let result = client.fetch_repositories(&username).await;
            if tx.send(FetchCompletion { username, result }).is_err() {
                debug!("Fetch completed after its receiver was dropped");
            }
        });

        rx
    }
}
