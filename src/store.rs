use crate::error::{RepoSearchError, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Where the last committed username lives between runs.
pub trait UsernameStore: Send + Sync {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, username: &str) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredState {
    username: String,
    saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FileUsernameStore {
    path: PathBuf,
}

impl FileUsernameStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `state.json` in the platform's config directory for this program.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "github-repo-search").ok_or_else(|| {
            RepoSearchError::Config("Could not determine config directory".to_string())
        })?;
        Ok(dirs.config_dir().join("state.json"))
    }
}

impl UsernameStore for FileUsernameStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No stored username");
            return Ok(None);
        }

        let contents = fs::read(&self.path)?;
        match serde_json::from_slice::<StoredState>(&contents) {
            Ok(state) => {
                debug!(username = %state.username, saved_at = %state.saved_at, "Loaded stored username");
                Ok(Some(state.username))
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable state file");
                Ok(None)
            }
        }
    }

    fn save(&self, username: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let state = StoredState {
            username: username.to_string(),
            saved_at: Utc::now(),
        };
        let contents = serde_json::to_string_pretty(&state)?;
        fs::write(&self.path, contents)?;
        debug!(username, path = %self.path.display(), "Saved username");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryUsernameStore {
    username: Mutex<Option<String>>,
}

impl MemoryUsernameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: Mutex::new(Some(username.into())),
        }
    }
}

impl UsernameStore for MemoryUsernameStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self
            .username
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save(&self, username: &str) -> Result<()> {
        *self
            .username
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(username.to_string());
        Ok(())
    }
}
