//! Approval surface error types.

/// Failure to talk to the human through the approval surface
/// (closed stdin, broken terminal, dismissed dialog).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Approval Surface Error: {} at line {} in {}", message, line, file)]
pub struct SurfaceError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SurfaceError {
    /// Create a new SurfaceError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
