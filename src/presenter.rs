use crate::error::FetchError;
use crate::types::RepositoryRecord;
use serde::Serialize;
use tracing::debug;

pub const LOAD_FAILURE_MESSAGE: &str = "could not load repositories";

/// What the list needs to draw one repository and act on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowViewModel {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stars: u64,
    pub language: Option<String>,
}

impl From<&RepositoryRecord> for RowViewModel {
    fn from(record: &RepositoryRecord) -> Self {
        RowViewModel {
            id: record.id(),
            name: record.name().to_string(),
            full_name: record.full_name().to_string(),
            html_url: record.html_url().to_string(),
            description: record.description().map(str::to_string),
            stars: record.stars(),
            language: record.language().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

/// Either every row, in fetch order, or a single failure notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationOutcome {
    Rows(Vec<RowViewModel>),
    Failure(Notification),
}

impl PresentationOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, PresentationOutcome::Failure(_))
    }
}

pub fn present(result: &Result<Vec<RepositoryRecord>, FetchError>) -> PresentationOutcome {
    match result {
        Ok(records) => PresentationOutcome::Rows(records.iter().map(RowViewModel::from).collect()),
        Err(e) => {
            debug!(kind = ?e.kind(), "Presenting fetch failure");
            PresentationOutcome::Failure(Notification {
                message: LOAD_FAILURE_MESSAGE.to_string(),
            })
        }
    }
}
