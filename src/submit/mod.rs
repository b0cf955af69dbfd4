//! Submission side effects

mod log_notifier;
mod submission;
mod traits;

pub use log_notifier::LogNotifier;
pub use submission::Submission;
pub use traits::SubmissionNotifier;

#[cfg(test)]
pub use traits::MockSubmissionNotifier;
