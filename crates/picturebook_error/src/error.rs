//! Top-level error wrapper types.

use crate::{
    ApiError, ConfigError, ExtractionError, ImageError, JsonError, SessionError, StorageError,
    SurfaceError,
};

/// Every error condition a Picturebook operation can surface.
///
/// # Examples
///
/// ```
/// use picturebook_error::{ConfigError, PicturebookError};
///
/// let err: PicturebookError = ConfigError::new("poll interval must be positive").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PicturebookErrorKind {
    /// Remote API error
    #[from(ApiError)]
    Api(ApiError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Storyboard persistence error
    #[from(StorageError)]
    Storage(StorageError),
    /// Conversation session error
    #[from(SessionError)]
    Session(SessionError),
    /// Structured data extraction error
    #[from(ExtractionError)]
    Extraction(ExtractionError),
    /// Illustration generation error
    #[from(ImageError)]
    Image(ImageError),
    /// Approval surface error
    #[from(SurfaceError)]
    Surface(SurfaceError),
}

/// Picturebook error with kind discrimination.
///
/// # Examples
///
/// ```
/// use picturebook_error::{
///     ExtractionError, ExtractionErrorKind, PicturebookErrorKind, PicturebookResult,
/// };
///
/// fn extract() -> PicturebookResult<()> {
///     Err(ExtractionError::new(ExtractionErrorKind::NoJsonBlockFound))?
/// }
///
/// let err = extract().unwrap_err();
/// assert!(matches!(err.kind(), PicturebookErrorKind::Extraction(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Picturebook Error: {}", _0)]
pub struct PicturebookError(Box<PicturebookErrorKind>);

impl PicturebookError {
    /// Create a new error from a kind.
    pub fn new(kind: PicturebookErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PicturebookErrorKind {
        &self.0
    }
}

impl<T> From<T> for PicturebookError
where
    T: Into<PicturebookErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Picturebook operations.
pub type PicturebookResult<T> = std::result::Result<T, PicturebookError>;
