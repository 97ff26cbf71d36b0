//! Run status.

use serde::{Deserialize, Serialize};

/// Observed state of an asynchronous run.
///
/// Only `Completed` allows replies to be read. `Failed` carries the raw
/// status the service reported so callers can surface it.
///
/// # Examples
///
/// ```
/// use picturebook_core::RunStatus;
///
/// assert!(!RunStatus::Pending.is_terminal());
/// assert!(RunStatus::Completed.is_terminal());
/// assert!(RunStatus::Failed("expired".to_string()).is_terminal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RunStatus {
    /// Queued or in progress
    #[display("pending")]
    Pending,
    /// Finished producing replies
    #[display("completed")]
    Completed,
    /// Ended without completing
    #[display("{}", _0)]
    Failed(String),
}

impl RunStatus {
    /// Whether polling can stop.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunStatus::Pending)
    }
}
