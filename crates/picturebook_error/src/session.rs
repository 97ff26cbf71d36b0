//! Conversation session error types.

/// Specific error conditions for a conversation session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SessionErrorKind {
    /// Persona or conversation creation failed; nothing can run
    #[display("Session setup failed: {}", _0)]
    SetupFailed(String),
    /// The run did not complete before the configured ceiling
    #[display("Run {} did not complete within {}ms", run_id, waited_ms)]
    Timeout {
        /// Identifier of the run being awaited
        run_id: String,
        /// Milliseconds spent waiting
        waited_ms: u64,
    },
    /// The run reached a terminal status other than completed
    #[display("Run {} ended with status '{}'", run_id, status)]
    RunFailed {
        /// Identifier of the failed run
        run_id: String,
        /// Raw status reported by the service
        status: String,
    },
}

/// Error type for conversation session operations.
///
/// # Examples
///
/// ```
/// use picturebook_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::Timeout {
///     run_id: "run_abc".to_string(),
///     waited_ms: 5000,
/// });
/// assert!(format!("{}", err).contains("run_abc"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The specific error condition
    pub kind: SessionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
