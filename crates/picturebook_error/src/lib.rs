//! Error types for Picturebook.
//!
//! This crate provides the error types used throughout the Picturebook workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use picturebook_error::{PicturebookResult, SessionError, SessionErrorKind};
//!
//! fn start() -> PicturebookResult<()> {
//!     Err(SessionError::new(SessionErrorKind::SetupFailed(
//!         "assistant creation refused".to_string(),
//!     )))?
//! }
//!
//! match start() {
//!     Ok(()) => println!("Ready"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod error;
mod extraction;
mod image;
mod json;
mod session;
mod storage;
mod surface;

pub use api::{ApiError, ApiErrorKind};
pub use config::ConfigError;
pub use error::{PicturebookError, PicturebookErrorKind, PicturebookResult};
pub use extraction::{ExtractionError, ExtractionErrorKind};
pub use image::{ImageError, ImageErrorKind};
pub use json::JsonError;
pub use session::{SessionError, SessionErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use surface::SurfaceError;
