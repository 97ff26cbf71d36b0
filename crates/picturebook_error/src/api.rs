//! Remote API error types.

/// Specific error conditions when talking to the remote assistant or image service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ApiErrorKind {
    /// The request never produced a response (DNS, TLS, connection reset)
    #[display("Request failed: {}", _0)]
    Request(String),
    /// The service answered with a non-success status
    #[display("API returned status {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or error message from the service
        message: String,
    },
    /// The response body did not match the expected shape
    #[display("Failed to decode response: {}", _0)]
    Decode(String),
    /// No API key was found in the configured environment variable
    #[display("API key not set: {}", _0)]
    MissingApiKey(String),
}

/// Error type for remote API calls.
///
/// # Examples
///
/// ```
/// use picturebook_error::{ApiError, ApiErrorKind};
///
/// let err = ApiError::new(ApiErrorKind::Status {
///     status: 429,
///     message: "Rate limit reached".to_string(),
/// });
/// assert!(format!("{}", err).contains("429"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("API Error: {} at line {} in {}", kind, line, file)]
pub struct ApiError {
    /// The specific error condition
    pub kind: ApiErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ApiError {
    /// Create a new ApiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ApiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
