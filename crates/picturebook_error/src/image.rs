//! Illustration error types.

/// Specific error conditions while illustrating a storyboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ImageErrorKind {
    /// The image service rejected or failed the request for a page
    #[display("Image generation failed for page {}: {}", page, message)]
    GenerationFailed {
        /// Zero-based index of the page in the storyboard
        page: usize,
        /// Underlying failure
        message: String,
    },
    /// The page has no illustration description to send
    #[display("Page {} has no illustration description", _0)]
    MissingDescription(usize),
    /// The service answered without any image reference
    #[display("Image service returned no images for page {}", _0)]
    EmptyResponse(usize),
}

/// Error type for illustration generation.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The specific error condition
    pub kind: ImageErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
