use crate::presenter::{Notification, PresentationOutcome, RowViewModel};
use tracing::debug;

/// Rendered list plus the last failure notice. Owned by whoever draws it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    rows: Vec<RowViewModel>,
    notification: Option<Notification>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful outcomes replace the rows wholesale; failures keep the
    /// previous rows and only record the notice.
    pub fn apply(&mut self, outcome: PresentationOutcome) {
        match outcome {
            PresentationOutcome::Rows(rows) => {
                debug!(count = rows.len(), "Replacing rendered rows");
                self.rows = rows;
                self.notification = None;
            }
            PresentationOutcome::Failure(notification) => {
                self.notification = Some(notification);
            }
        }
    }

    pub fn rows(&self) -> &[RowViewModel] {
        &self.rows
    }

    /// Row at a 1-based display position.
    pub fn row(&self, position: usize) -> Option<&RowViewModel> {
        position.checked_sub(1).and_then(|i| self.rows.get(i))
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }
}
