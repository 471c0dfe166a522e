use crate::dispatcher::{self, Effect};
use crate::error::{RepoSearchError, Result};
use crate::github::GitHubClient;
use crate::platform::PlatformEffects;
use crate::presenter::present;
use crate::state::ListState;
use crate::store::UsernameStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Ties the fetch, presentation and row actions to one username and one list.
pub struct App {
    client: GitHubClient,
    store: Arc<dyn UsernameStore>,
    platform: Arc<dyn PlatformEffects>,
    username: Option<String>,
    state: ListState,
}

impl App {
    pub fn new(
        client: GitHubClient,
        store: Arc<dyn UsernameStore>,
        platform: Arc<dyn PlatformEffects>,
    ) -> Self {
        Self {
            client,
            store,
            platform,
            username: None,
            state: ListState::new(),
        }
    }

    /// Restore the stored username and, if there is one, load its list.
    pub async fn start(&mut self) -> Result<()> {
        self.username = self.store.load()?;
        match self.username.clone() {
            Some(username) => {
                info!(username = %username, "Restored username");
                self.refresh().await
            }
            None => {
                info!("No stored username; waiting for input");
                Ok(())
            }
        }
    }

    /// Persist `username`, then fetch its repositories. The fetch runs even
    /// when saving fails; the save error is returned afterwards.
    pub async fn commit_username(&mut self, username: &str) -> Result<()> {
        let saved = self.store.save(username);
        match &saved {
            Ok(()) => info!(username, "Username saved"),
            Err(e) => warn!(username, error = %e, "Failed to save username"),
        }
        self.username = Some(username.to_string());
        self.refresh().await?;
        saved
    }

    /// Fetch the current username's repositories and fold the outcome into
    /// the list state. A failed fetch is reported through the state, not
    /// as an error.
    pub async fn refresh(&mut self) -> Result<()> {
        let username = self.username.as_deref().ok_or(RepoSearchError::NoUsername)?;

        let result = self.client.fetch_repositories(username).await;
        if let Err(e) = &result {
            warn!(username, error = %e, "Repository fetch failed");
        }
        self.state.apply(present(&result));
        Ok(())
    }

    pub fn select(&self, position: usize) -> Result<Effect> {
        let row = self
            .state
            .row(position)
            .ok_or(RepoSearchError::RowNotFound(position))?;
        let effect = dispatcher::on_row_selected(row);
        dispatcher::perform(&effect, self.platform.as_ref())?;
        Ok(effect)
    }

    pub fn share(&self, position: usize) -> Result<Effect> {
        let row = self
            .state
            .row(position)
            .ok_or(RepoSearchError::RowNotFound(position))?;
        let effect = dispatcher::on_row_share_requested(row);
        dispatcher::perform(&effect, self.platform.as_ref())?;
        Ok(effect)
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }
}
