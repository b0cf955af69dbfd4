//! Trait abstraction for submit side effects to enable mocking in tests

use super::Submission;
use anyhow::Result;

/// Receives every successfully validated submission
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionNotifier {
    /// Deliver a submission
    fn notify(&mut self, submission: &Submission) -> Result<()>;
}
