//! Notifier that records submissions in the log

use super::{Submission, SubmissionNotifier};
use anyhow::Result;

/// Logs each submission as a JSON record
#[derive(Debug, Default)]
pub struct LogNotifier {
    delivered: usize,
}

impl LogNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionNotifier for LogNotifier {
    fn notify(&mut self, submission: &Submission) -> Result<()> {
        let record = serde_json::to_string(submission)?;
        self.delivered += 1;
        tracing::info!(count = self.delivered, "form submitted: {record}");
        Ok(())
    }
}
