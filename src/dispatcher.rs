use crate::error::Result;
use crate::platform::PlatformEffects;
use crate::presenter::RowViewModel;
use tracing::info;

/// An external action for the platform to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenLink(String),
    ShareLink(String),
}

pub fn on_row_selected(row: &RowViewModel) -> Effect {
    Effect::OpenLink(row.html_url.clone())
}

pub fn on_row_share_requested(row: &RowViewModel) -> Effect {
    Effect::ShareLink(row.html_url.clone())
}

pub fn perform(effect: &Effect, platform: &dyn PlatformEffects) -> Result<()> {
    match effect {
        Effect::OpenLink(url) => {
            info!(url = %url, "Opening repository link");
            platform.open_in_viewer(url)
        }
        Effect::ShareLink(url) => {
            info!(url = %url, "Sharing repository link");
            platform.share_text(url)
        }
    }
}
