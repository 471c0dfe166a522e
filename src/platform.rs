use crate::error::{RepoSearchError, Result};
use colored::*;
use std::process::{Command, Stdio};
use std::sync::Mutex;
use tracing::{debug, error};

/// Host side of the open and share actions.
pub trait PlatformEffects: Send + Sync {
    fn open_in_viewer(&self, url: &str) -> Result<()>;
    fn share_text(&self, text: &str) -> Result<()>;
}

/// Opens links with the desktop's URL handler and prints shared text.
#[derive(Debug, Default)]
pub struct TerminalPlatform;

impl TerminalPlatform {
    pub fn new() -> Self {
        Self
    }

    fn opener_command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl PlatformEffects for TerminalPlatform {
    fn open_in_viewer(&self, url: &str) -> Result<()> {
        let mut cmd = Self::opener_command(url);
        debug!(?cmd, "Launching URL opener");

        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| {
                error!(url, error = %e, "Failed to launch URL opener");
                RepoSearchError::Platform(format!("could not open {}: {}", url, e))
            })
    }

    fn share_text(&self, text: &str) -> Result<()> {
        println!("{} {}", "Share:".bold().cyan(), text);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Open(String),
    Share(String),
}

/// Keeps every call instead of acting on it.
#[derive(Debug, Default)]
pub struct RecordingPlatform {
    calls: Mutex<Vec<PlatformCall>>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, call: PlatformCall) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
    }
}

impl PlatformEffects for RecordingPlatform {
    fn open_in_viewer(&self, url: &str) -> Result<()> {
        self.record(PlatformCall::Open(url.to_string()));
        Ok(())
    }

    fn share_text(&self, text: &str) -> Result<()> {
        self.record(PlatformCall::Share(text.to_string()));
        Ok(())
    }
}
