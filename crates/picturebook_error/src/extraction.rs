//! Extraction error types.

/// Why structured data could not be pulled out of a reply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExtractionErrorKind {
    /// The reply has no fenced block tagged `json`
    #[display("No JSON block found in the reply")]
    NoJsonBlockFound,
    /// The fenced block does not parse, or does not fit the expected shape
    #[display("Malformed JSON: {}", _0)]
    MalformedJson(String),
}

/// Error type for structured extraction.
///
/// # Examples
///
/// ```
/// use picturebook_error::{ExtractionError, ExtractionErrorKind};
///
/// let err = ExtractionError::new(ExtractionErrorKind::NoJsonBlockFound);
/// assert_eq!(err.kind, ExtractionErrorKind::NoJsonBlockFound);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractionError {
    /// The specific error condition
    pub kind: ExtractionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ExtractionError {
    /// Create a new ExtractionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
