//! Storyboard persistence for Picturebook.
//!
//! Storyboards are stored as standalone JSON documents keyed by an
//! identifier, one document per completed pipeline run. There is no index
//! and no schema version; a key is all it takes to load a document back.
//!
//! # Example
//!
//! ```rust
//! use picturebook_storage::{FileSystemStoryboardStore, StoryboardStore, new_storyboard_id};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileSystemStoryboardStore::new("/tmp/storyboards")?;
//! let id = new_storyboard_id();
//!
//! store.save(&id, &serde_json::json!([{"page_number": 1}])).await?;
//! let loaded = store.load(&id).await?;
//! assert_eq!(loaded[0]["page_number"], 1);
//! # Ok(())
//! # }
//! ```

use picturebook_error::PicturebookResult;
use serde_json::Value as JsonValue;

mod filesystem;

pub use filesystem::FileSystemStoryboardStore;
pub use picturebook_error::{StorageError, StorageErrorKind};

/// Trait for pluggable storyboard storage backends.
#[async_trait::async_trait]
pub trait StoryboardStore: Send + Sync {
    /// Store a JSON document under a key, replacing any previous document.
    ///
    /// # Arguments
    ///
    /// * `key` - Identifier of the document, usually a UUID
    /// * `document` - The JSON value to persist
    async fn save(&self, key: &str, document: &JsonValue) -> PicturebookResult<()>;

    /// Load the JSON document stored under a key.
    ///
    /// Returns a `NotFound` storage error if nothing is stored under the key.
    async fn load(&self, key: &str) -> PicturebookResult<JsonValue>;

    /// Check whether a document exists under a key.
    async fn exists(&self, key: &str) -> PicturebookResult<bool>;
}

/// Generate a fresh, random storyboard identifier.
pub fn new_storyboard_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
